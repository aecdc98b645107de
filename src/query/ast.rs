//! Query structures
//!
//! Mirrors the remote service's query-expression surface: column sets,
//! filter criteria, and link entities with aliases and nested links.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entity::AttributeValue;

/// The set of attribute names a caller requests
///
/// Duplicates collapse; order is irrelevant. The default is the *empty*
/// explicit set, matching a freshly constructed column set on the wire
/// (no base columns unless asked for).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnSet {
    /// Every present attribute
    All,
    /// Only the named attributes
    Columns(BTreeSet<String>),
}

impl ColumnSet {
    /// All present attributes
    pub fn all() -> Self {
        ColumnSet::All
    }

    /// No attributes at all
    pub fn none() -> Self {
        ColumnSet::Columns(BTreeSet::new())
    }

    /// An explicit set of attribute names
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ColumnSet::Columns(columns.into_iter().map(Into::into).collect())
    }

    /// True for the all-columns sentinel
    pub fn is_all(&self) -> bool {
        matches!(self, ColumnSet::All)
    }

    /// True if the name is requested
    pub fn contains(&self, name: &str) -> bool {
        match self {
            ColumnSet::All => true,
            ColumnSet::Columns(names) => names.contains(name),
        }
    }

    /// True if nothing is requested
    pub fn is_empty(&self) -> bool {
        match self {
            ColumnSet::All => false,
            ColumnSet::Columns(names) => names.is_empty(),
        }
    }
}

impl Default for ColumnSet {
    fn default() -> Self {
        ColumnSet::none()
    }
}

/// Join operator for a link entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinOperator {
    /// Rows without a match are dropped
    Inner,
    /// Rows without a match are kept, with the alias's columns absent
    Outer,
}

impl JoinOperator {
    /// Returns the operator name for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinOperator::Inner => "inner",
            JoinOperator::Outer => "outer",
        }
    }
}

/// Condition operator for filter criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionOperator {
    /// Attribute equals the value; null never matches
    Equal,
    /// Attribute differs from the value; null never matches
    NotEqual,
    /// Attribute is explicitly null or absent
    Null,
    /// Attribute is present with a non-null value
    NotNull,
}

impl ConditionOperator {
    /// Returns the operator name for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionOperator::Equal => "eq",
            ConditionOperator::NotEqual => "ne",
            ConditionOperator::Null => "null",
            ConditionOperator::NotNull => "not-null",
        }
    }
}

/// A single filter condition (attribute + operator + optional value)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Attribute name; the pk convention `<type>id` applies
    pub attribute: String,
    /// Condition operator
    pub operator: ConditionOperator,
    /// Comparison value, for `Equal`/`NotEqual`
    pub value: Option<AttributeValue>,
}

impl Condition {
    /// Create an equality condition
    pub fn eq(attribute: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self {
            attribute: attribute.into(),
            operator: ConditionOperator::Equal,
            value: Some(value.into()),
        }
    }

    /// Create an inequality condition
    pub fn ne(attribute: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self {
            attribute: attribute.into(),
            operator: ConditionOperator::NotEqual,
            value: Some(value.into()),
        }
    }

    /// Create a null-or-absent condition
    pub fn null(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            operator: ConditionOperator::Null,
            value: None,
        }
    }

    /// Create a present-and-non-null condition
    pub fn not_null(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            operator: ConditionOperator::NotNull,
            value: None,
        }
    }
}

/// How a filter combines its conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterLogic {
    /// Every condition must match
    And,
    /// At least one condition must match
    Or,
}

/// Filter criteria: conditions combined with And/Or logic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Combination logic
    pub logic: FilterLogic,
    /// The conditions
    pub conditions: Vec<Condition>,
}

impl FilterSpec {
    /// A filter matching records that satisfy every condition
    pub fn all_of(conditions: Vec<Condition>) -> Self {
        Self {
            logic: FilterLogic::And,
            conditions,
        }
    }

    /// A filter matching records that satisfy at least one condition
    pub fn any_of(conditions: Vec<Condition>) -> Self {
        Self {
            logic: FilterLogic::Or,
            conditions,
        }
    }
}

/// A link-entity (join) specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkSpec {
    /// Type name of the entity being joined in
    pub to_entity: String,
    /// Join attribute on the record the link hangs off (base or enclosing link)
    pub from_attribute: String,
    /// Join attribute on the linked entity; the pk convention applies
    pub to_attribute: String,
    /// Inner or outer join
    pub join: JoinOperator,
    /// Alias for the joined columns; defaults to the target type name
    pub alias: Option<String>,
    /// Columns to pull from the linked entity
    pub columns: ColumnSet,
    /// Criteria the linked record must satisfy
    pub filter: Option<FilterSpec>,
    /// Nested links joining from the linked entity
    pub links: Vec<LinkSpec>,
}

impl LinkSpec {
    /// Creates a link with no alias, no columns, no filter, no nested links
    pub fn new(
        to_entity: impl Into<String>,
        from_attribute: impl Into<String>,
        to_attribute: impl Into<String>,
        join: JoinOperator,
    ) -> Self {
        Self {
            to_entity: to_entity.into(),
            from_attribute: from_attribute.into(),
            to_attribute: to_attribute.into(),
            join,
            alias: None,
            columns: ColumnSet::none(),
            filter: None,
            links: Vec::new(),
        }
    }

    /// The alias joined columns are keyed under
    pub fn alias_or_default(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.to_entity)
    }
}

/// A full query: base type, columns, filter, ordered links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySpec {
    /// Base entity type to scan
    pub entity_type: String,
    /// Base columns to project
    pub columns: ColumnSet,
    /// Criteria base records must satisfy
    pub filter: Option<FilterSpec>,
    /// Link entities, applied in declaration order
    pub links: Vec<LinkSpec>,
}

impl QuerySpec {
    /// Creates a query with no columns, no filter and no links
    pub fn new(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            columns: ColumnSet::none(),
            filter: None,
            links: Vec::new(),
        }
    }

    /// Appends a link entity
    pub fn add_link(&mut self, link: LinkSpec) {
        self.links.push(link);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_set_deduplicates() {
        let columns = ColumnSet::new(["field", "field", "other"]);
        match &columns {
            ColumnSet::Columns(names) => assert_eq!(names.len(), 2),
            ColumnSet::All => panic!("expected explicit set"),
        }
        assert!(columns.contains("field"));
        assert!(!columns.contains("missing"));
    }

    #[test]
    fn test_default_column_set_is_empty() {
        let columns = ColumnSet::default();
        assert!(columns.is_empty());
        assert!(!columns.contains("field"));
        assert!(!ColumnSet::all().is_empty());
    }

    #[test]
    fn test_link_alias_defaults_to_target_type() {
        let mut link = LinkSpec::new("parent", "parent", "parentid", JoinOperator::Inner);
        assert_eq!(link.alias_or_default(), "parent");

        link.alias = Some("parententity".to_string());
        assert_eq!(link.alias_or_default(), "parententity");
    }
}
