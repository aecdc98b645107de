//! Condition filtering for query evaluation
//!
//! Strict matching, no type coercion. Null values never satisfy `Equal`
//! or `NotEqual`; the `Null` operator matches explicit null and absent
//! alike, mirroring the remote service.

use crate::entity::EntityRecord;
use crate::query::{Condition, ConditionOperator, FilterLogic, FilterSpec};

/// Evaluates filter criteria against records
pub struct ConditionFilter;

impl ConditionFilter {
    /// Checks whether a record satisfies the filter
    pub fn matches(record: &EntityRecord, filter: &FilterSpec) -> bool {
        match filter.logic {
            FilterLogic::And => filter
                .conditions
                .iter()
                .all(|condition| Self::matches_condition(record, condition)),
            FilterLogic::Or => filter
                .conditions
                .iter()
                .any(|condition| Self::matches_condition(record, condition)),
        }
    }

    /// Checks a single condition
    fn matches_condition(record: &EntityRecord, condition: &Condition) -> bool {
        let value = record.resolve(&condition.attribute);
        match condition.operator {
            ConditionOperator::Null => match value {
                None => true,
                Some(v) => v.is_null(),
            },
            ConditionOperator::NotNull => matches!(value, Some(v) if !v.is_null()),
            ConditionOperator::Equal => match (value, &condition.value) {
                (Some(actual), Some(expected)) => actual.joins_with(expected),
                _ => false,
            },
            ConditionOperator::NotEqual => match (value, &condition.value) {
                (Some(actual), Some(expected)) => {
                    !actual.is_null() && !actual.joins_with(expected)
                }
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{AttributeValue, EntityReference};
    use uuid::Uuid;

    fn record() -> EntityRecord {
        let mut record = EntityRecord::new("child");
        record.set("name", "entity1");
        record.set("myvalue", AttributeValue::Null);
        record
    }

    #[test]
    fn test_equal_matches_value() {
        let filter = FilterSpec::all_of(vec![Condition::eq("name", "entity1")]);
        assert!(ConditionFilter::matches(&record(), &filter));

        let filter = FilterSpec::all_of(vec![Condition::eq("name", "entity2")]);
        assert!(!ConditionFilter::matches(&record(), &filter));
    }

    #[test]
    fn test_null_value_never_equals() {
        let filter = FilterSpec::all_of(vec![Condition::eq("myvalue", "value")]);
        assert!(!ConditionFilter::matches(&record(), &filter));

        // NotEqual does not match null either
        let filter = FilterSpec::all_of(vec![Condition::ne("myvalue", "value")]);
        assert!(!ConditionFilter::matches(&record(), &filter));
    }

    #[test]
    fn test_null_operator_covers_null_and_absent() {
        let filter = FilterSpec::all_of(vec![Condition::null("myvalue")]);
        assert!(ConditionFilter::matches(&record(), &filter));

        let filter = FilterSpec::all_of(vec![Condition::null("missing")]);
        assert!(ConditionFilter::matches(&record(), &filter));

        let filter = FilterSpec::all_of(vec![Condition::null("name")]);
        assert!(!ConditionFilter::matches(&record(), &filter));
    }

    #[test]
    fn test_not_null_operator() {
        let filter = FilterSpec::all_of(vec![Condition::not_null("name")]);
        assert!(ConditionFilter::matches(&record(), &filter));

        let filter = FilterSpec::all_of(vec![Condition::not_null("myvalue")]);
        assert!(!ConditionFilter::matches(&record(), &filter));
    }

    #[test]
    fn test_or_logic() {
        let filter = FilterSpec::any_of(vec![
            Condition::eq("name", "entity2"),
            Condition::not_null("name"),
        ]);
        assert!(ConditionFilter::matches(&record(), &filter));
    }

    #[test]
    fn test_equal_on_pk_and_reference() {
        let record = record();
        let filter = FilterSpec::all_of(vec![Condition::eq(
            "childid",
            EntityReference::new("child", record.id()),
        )]);
        assert!(ConditionFilter::matches(&record, &filter));

        let filter =
            FilterSpec::all_of(vec![Condition::eq("childid", Uuid::new_v4())]);
        assert!(!ConditionFilter::matches(&record, &filter));
    }
}
