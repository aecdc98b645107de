//! Query evaluator for fauxcrm
//!
//! Executes query specs against the entity store, producing deterministic
//! results: scan the base type in insertion order, filter, project base
//! columns, then expand through link entities in declaration order.

use crate::query::{QueryError, QueryResult, QuerySpec};
use crate::store::EntityStore;

use super::filters::ConditionFilter;
use super::links::LinkResolver;
use super::projector::ColumnProjector;
use super::result::ResultSet;

/// Evaluates query specs against a store
pub struct QueryEvaluator;

impl QueryEvaluator {
    /// Evaluates a query and returns its result rows
    ///
    /// Deterministic: same store contents + same spec = same rows in the
    /// same order. Errors are all-or-nothing; no partial result escapes.
    pub fn evaluate(store: &EntityStore, spec: &QuerySpec) -> QueryResult<ResultSet> {
        // Step 1: unknown base type fails the whole call
        if !store.contains_type(&spec.entity_type) {
            return Err(QueryError::UnknownEntityType(spec.entity_type.clone()));
        }

        // Step 1b: link metadata is checked before any row exists, so a
        // malformed link fails even when filters leave nothing to join
        for link in &spec.links {
            LinkResolver::validate(store, link)?;
        }

        let mut rows = Vec::new();
        let mut scanned = 0;

        // Step 3: scan base records in insertion order
        for record in store.scan(&spec.entity_type) {
            scanned += 1;

            // Step 4: base filter
            if let Some(filter) = &spec.filter {
                if !ConditionFilter::matches(&record, filter) {
                    continue;
                }
            }

            // Step 5: seed the candidate with its projected base columns
            let base = ColumnProjector::project(&record, &spec.columns);

            // Step 6: links in declaration order; each candidate row is
            // expanded independently, and inner links may drop it
            let mut candidates = vec![base];
            for link in &spec.links {
                let mut next = Vec::new();
                for candidate in &candidates {
                    next.extend(LinkResolver::resolve(store, candidate, &record, link)?);
                }
                candidates = next;
                if candidates.is_empty() {
                    break;
                }
            }

            rows.extend(candidates);
        }

        // Step 7: scan order is result order
        Ok(ResultSet { rows, scanned })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{AttributeValue, EntityRecord};
    use crate::query::{ColumnSet, Condition, FilterSpec, JoinOperator, LinkSpec};

    fn store_with(records: Vec<EntityRecord>) -> EntityStore {
        let mut store = EntityStore::new();
        store.seed(records);
        store
    }

    #[test]
    fn test_unknown_base_type_fails() {
        let store = EntityStore::new();
        let spec = QuerySpec::new("testentity");

        let err = QueryEvaluator::evaluate(&store, &spec).unwrap_err();
        assert_eq!(err, QueryError::UnknownEntityType("testentity".to_string()));
    }

    #[test]
    fn test_malformed_link_fails_before_any_row_is_built() {
        // Even with a base filter that matches no record, the bad link
        // must fail the query; an empty Ok would be a partial result.
        let mut record = EntityRecord::new("testentity");
        record.set("name", "a");
        let store = store_with(vec![record]);

        let mut spec = QuerySpec::new("testentity");
        spec.filter = Some(FilterSpec::all_of(vec![Condition::eq("name", "nomatch")]));
        spec.add_link(LinkSpec::new(
            "nosuchtype",
            "parent",
            "parentid",
            JoinOperator::Inner,
        ));

        let err = QueryEvaluator::evaluate(&store, &spec).unwrap_err();
        assert_eq!(err, QueryError::UnknownEntityType("nosuchtype".to_string()));
    }

    #[test]
    fn test_later_link_is_validated_when_earlier_inner_empties_rows() {
        let parent = EntityRecord::new("parent");
        let orphan = EntityRecord::new("child");
        let store = store_with(vec![parent, orphan]);

        let mut spec = QuerySpec::new("child");
        // No child references a parent, so this inner link drops every row.
        spec.add_link(LinkSpec::new(
            "parent",
            "parent",
            "parentid",
            JoinOperator::Inner,
        ));
        spec.add_link(LinkSpec::new(
            "parent",
            "parent",
            "bogus",
            JoinOperator::Inner,
        ));

        let err = QueryEvaluator::evaluate(&store, &spec).unwrap_err();
        assert_eq!(err, QueryError::unknown_join_attribute("parent", "bogus"));
    }

    #[test]
    fn test_base_projection_keeps_explicit_null() {
        let mut record = EntityRecord::new("testentity");
        record.set("field", AttributeValue::Null);
        let store = store_with(vec![record]);

        let mut spec = QuerySpec::new("testentity");
        spec.columns = ColumnSet::new(["field"]);

        let result = QueryEvaluator::evaluate(&store, &spec).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result.rows[0].get("field"), Some(&AttributeValue::Null));
    }

    #[test]
    fn test_base_filter_drops_rows() {
        let mut a = EntityRecord::new("testentity");
        a.set("name", "a");
        let mut b = EntityRecord::new("testentity");
        b.set("name", "b");
        let store = store_with(vec![a, b]);

        let mut spec = QuerySpec::new("testentity");
        spec.columns = ColumnSet::new(["name"]);
        spec.filter = Some(FilterSpec::all_of(vec![Condition::eq("name", "b")]));

        let result = QueryEvaluator::evaluate(&store, &spec).unwrap();

        assert_eq!(result.scanned, 2);
        assert_eq!(result.len(), 1);
        assert_eq!(
            result.rows[0].get("name").and_then(AttributeValue::as_str),
            Some("b")
        );
    }

    #[test]
    fn test_inner_join_drops_unmatched_base_rows() {
        let parent = EntityRecord::new("parent");
        let mut matched = EntityRecord::new("child");
        matched.set("parent", parent.to_reference());
        let orphan = EntityRecord::new("child");
        let store = store_with(vec![parent, matched.clone(), orphan]);

        let mut spec = QuerySpec::new("child");
        spec.add_link(LinkSpec::new(
            "parent",
            "parent",
            "parentid",
            JoinOperator::Inner,
        ));

        let result = QueryEvaluator::evaluate(&store, &spec).unwrap();

        assert_eq!(result.scanned, 2);
        assert_eq!(result.len(), 1);
        assert_eq!(result.rows[0].id(), matched.id());
    }

    #[test]
    fn test_outer_join_keeps_unmatched_base_rows() {
        let parent = EntityRecord::new("parent");
        let mut matched = EntityRecord::new("child");
        matched.set("parent", parent.to_reference());
        let orphan = EntityRecord::new("child");
        let store = store_with(vec![parent, matched, orphan.clone()]);

        let mut spec = QuerySpec::new("child");
        let mut link = LinkSpec::new("parent", "parent", "parentid", JoinOperator::Outer);
        link.columns = ColumnSet::all();
        spec.add_link(link);

        let result = QueryEvaluator::evaluate(&store, &spec).unwrap();

        assert_eq!(result.len(), 2);
        // The orphan row survives with no aliased column at all.
        let orphan_row = result
            .iter()
            .find(|row| row.id() == orphan.id())
            .unwrap();
        assert!(orphan_row.is_empty());
    }

    #[test]
    fn test_result_rows_follow_scan_order() {
        let records: Vec<EntityRecord> =
            (0..4).map(|_| EntityRecord::new("testentity")).collect();
        let ids: Vec<_> = records.iter().map(|r| r.id()).collect();
        let store = store_with(records);

        let spec = QuerySpec::new("testentity");
        let result = QueryEvaluator::evaluate(&store, &spec).unwrap();

        let row_ids: Vec<_> = result.iter().map(|r| r.id()).collect();
        assert_eq!(row_ids, ids);
    }

    #[test]
    fn test_multiple_matches_expand_into_rows() {
        let mut parent = EntityRecord::new("parent");
        parent.set("parentname", "parent name");
        let mut child1 = EntityRecord::new("child");
        child1.set("parent", parent.to_reference());
        child1.set("name", "entity1");
        let mut child2 = EntityRecord::new("child");
        child2.set("parent", parent.to_reference());
        child2.set("name", "entity2");
        let store = store_with(vec![parent, child1, child2]);

        let mut spec = QuerySpec::new("parent");
        spec.columns = ColumnSet::new(["parentname"]);
        let mut link = LinkSpec::new("child", "parentid", "parent", JoinOperator::Inner);
        link.alias = Some("c".to_string());
        link.columns = ColumnSet::new(["name"]);
        spec.add_link(link);

        let result = QueryEvaluator::evaluate(&store, &spec).unwrap();

        assert_eq!(result.len(), 2);
        let names: Vec<_> = result
            .iter()
            .map(|row| {
                row.aliased_value("c.name")
                    .and_then(AttributeValue::as_str)
                    .unwrap()
                    .to_string()
            })
            .collect();
        assert_eq!(names, vec!["entity1", "entity2"]);
        // Both rows still carry the base column.
        assert!(result.iter().all(|row| row.contains("parentname")));
    }
}
