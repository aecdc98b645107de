//! Link-entity (join) resolution
//!
//! A link hangs off a source record (the base record, or the record an
//! enclosing link matched) and joins records of `to_entity` whose
//! `to_attribute` equals the source's `from_attribute`. Every match
//! expands into its own result row, in scan order; an outer link with no
//! match keeps the row with that alias's columns entirely absent. A match
//! whose nested inner links all fail counts as no match, so an outer link
//! falls back to the bare row then too.
//!
//! Aliased columns are projected from the matched record for each row
//! individually. There is no shared scratch buffer, so a value from one
//! row's match can never survive into the next row when the next match
//! has the attribute null or absent.

use crate::entity::EntityRecord;
use crate::query::{JoinOperator, LinkSpec, QueryError, QueryResult};
use crate::store::EntityStore;

use super::filters::ConditionFilter;
use super::projector::ColumnProjector;

/// Resolves link specifications against the store
pub struct LinkResolver;

impl LinkResolver {
    /// Checks a link's metadata against the store, nested links included
    ///
    /// Runs once per link before any row is enumerated, so a malformed
    /// link fails the query even when no base row survives to reach it.
    pub fn validate(store: &EntityStore, link: &LinkSpec) -> QueryResult<()> {
        if !store.contains_type(&link.to_entity) {
            return Err(QueryError::UnknownEntityType(link.to_entity.clone()));
        }
        if !store.has_attribute(&link.to_entity, &link.to_attribute) {
            return Err(QueryError::unknown_join_attribute(
                &link.to_entity,
                &link.to_attribute,
            ));
        }
        for nested in &link.links {
            Self::validate(store, nested)?;
        }
        Ok(())
    }

    /// Expands one candidate row through a link
    ///
    /// `row` is the result row built so far; `source` is the record the
    /// link joins from. Returns zero rows when an inner link finds no
    /// match, and the unchanged row when an outer link finds none.
    /// Assumes the link passed [`LinkResolver::validate`].
    pub fn resolve(
        store: &EntityStore,
        row: &EntityRecord,
        source: &EntityRecord,
        link: &LinkSpec,
    ) -> QueryResult<Vec<EntityRecord>> {
        let alias = link.alias_or_default();
        let mut expanded = Vec::new();

        // An absent or null join value on the source matches nothing.
        if let Some(from_value) = source.resolve(&link.from_attribute) {
            for matched in store.scan(&link.to_entity) {
                let joins = matched
                    .resolve(&link.to_attribute)
                    .is_some_and(|to_value| to_value.joins_with(&from_value));
                if !joins {
                    continue;
                }
                if let Some(filter) = &link.filter {
                    if !ConditionFilter::matches(&matched, filter) {
                        continue;
                    }
                }

                // Fresh per-match projection: the enriched row carries only
                // what this matched record actually has.
                let mut enriched = row.clone();
                let projected = ColumnProjector::project(&matched, &link.columns);
                for (name, value) in projected.attributes() {
                    enriched.set_aliased(alias, name.clone(), value.clone());
                }

                // Nested links join from the record matched here.
                let mut rows = vec![enriched];
                for nested in &link.links {
                    let mut next = Vec::new();
                    for nested_row in &rows {
                        next.extend(Self::resolve(store, nested_row, &matched, nested)?);
                    }
                    rows = next;
                    if rows.is_empty() {
                        break;
                    }
                }
                expanded.extend(rows);
            }
        }

        if expanded.is_empty() && link.join == JoinOperator::Outer {
            return Ok(vec![row.clone()]);
        }
        Ok(expanded)
    }
}
