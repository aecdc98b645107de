//! Attribute value representation
//!
//! Attribute values are a closed sum type rather than a dynamic `object`:
//! primitives, typed references to other records, and alias-wrapped values
//! produced by link-entity queries. Absence has no variant — an absent
//! attribute is simply missing from the record's map.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A typed pointer to another entity record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityReference {
    /// Type name of the target record
    pub entity_type: String,
    /// Id of the target record
    pub id: Uuid,
}

impl EntityReference {
    /// Creates a reference to the record with the given type and id
    pub fn new(entity_type: impl Into<String>, id: Uuid) -> Self {
        Self {
            entity_type: entity_type.into(),
            id,
        }
    }
}

/// A joined column value, wrapped with its source alias and attribute name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasedValue {
    /// Alias of the link entity the value came from
    pub alias: String,
    /// Attribute name on the source record
    pub attribute: String,
    /// The underlying value
    pub value: Box<AttributeValue>,
}

impl AliasedValue {
    /// Wraps a value with its source alias and attribute name
    pub fn new(
        alias: impl Into<String>,
        attribute: impl Into<String>,
        value: AttributeValue,
    ) -> Self {
        Self {
            alias: alias.into(),
            attribute: attribute.into(),
            value: Box::new(value),
        }
    }
}

/// A single attribute value
///
/// `Null` is an explicit assignment, distinct from an attribute that was
/// never set. Equality is plain structural equality; join matching goes
/// through [`AttributeValue::joins_with`] so references and guids unify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Explicitly-assigned null
    Null,
    /// UTF-8 string
    String(String),
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit float
    Float(f64),
    /// Boolean
    Boolean(bool),
    /// UTC timestamp
    DateTime(DateTime<Utc>),
    /// Bare guid
    Guid(Uuid),
    /// Typed pointer to another record
    Reference(EntityReference),
    /// Alias-wrapped joined column value
    Aliased(AliasedValue),
}

impl AttributeValue {
    /// Returns true for an explicit null
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }

    /// Unwraps an aliased value to its underlying value; identity otherwise
    pub fn unaliased(&self) -> &AttributeValue {
        match self {
            AttributeValue::Aliased(aliased) => &aliased.value,
            other => other,
        }
    }

    /// Returns the string payload, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self.unaliased() {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an integer
    pub fn as_i64(&self) -> Option<i64> {
        match self.unaliased() {
            AttributeValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the boolean payload, if this is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self.unaliased() {
            AttributeValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the guid payload for guids and references
    pub fn as_guid(&self) -> Option<Uuid> {
        match self.unaliased() {
            AttributeValue::Guid(id) => Some(*id),
            AttributeValue::Reference(reference) => Some(reference.id),
            _ => None,
        }
    }

    /// Returns the reference payload, if this is a reference
    pub fn as_reference(&self) -> Option<&EntityReference> {
        match self.unaliased() {
            AttributeValue::Reference(reference) => Some(reference),
            _ => None,
        }
    }

    /// Returns the variant name, for error messages and logs
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::Null => "null",
            AttributeValue::String(_) => "string",
            AttributeValue::Integer(_) => "integer",
            AttributeValue::Float(_) => "float",
            AttributeValue::Boolean(_) => "boolean",
            AttributeValue::DateTime(_) => "datetime",
            AttributeValue::Guid(_) => "guid",
            AttributeValue::Reference(_) => "reference",
            AttributeValue::Aliased(_) => "aliased",
        }
    }

    /// Join-key equality
    ///
    /// A reference joins with the guid of the record it points at, so a
    /// lookup column matches the target's primary-key attribute. Null never
    /// joins with anything, including another null.
    pub fn joins_with(&self, other: &AttributeValue) -> bool {
        let lhs = self.unaliased();
        let rhs = other.unaliased();
        if lhs.is_null() || rhs.is_null() {
            return false;
        }
        match (lhs.as_guid(), rhs.as_guid()) {
            (Some(a), Some(b)) => a == b,
            _ => lhs == rhs,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Float(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Boolean(value)
    }
}

impl From<DateTime<Utc>> for AttributeValue {
    fn from(value: DateTime<Utc>) -> Self {
        AttributeValue::DateTime(value)
    }
}

impl From<Uuid> for AttributeValue {
    fn from(value: Uuid) -> Self {
        AttributeValue::Guid(value)
    }
}

impl From<EntityReference> for AttributeValue {
    fn from(value: EntityReference) -> Self {
        AttributeValue::Reference(value)
    }
}

impl From<AliasedValue> for AttributeValue {
    fn from(value: AliasedValue) -> Self {
        AttributeValue::Aliased(value)
    }
}
