//! Column projection
//!
//! Projection is governed by *presence*, not value: a requested attribute
//! that is explicitly null is included as null, a requested attribute the
//! record never had is omitted. Nothing is ever emitted as a null
//! placeholder for an absent attribute.

use crate::entity::EntityRecord;
use crate::query::ColumnSet;

/// Projects a record down to a requested column set
pub struct ColumnProjector;

impl ColumnProjector {
    /// Returns a fresh record with the same identity and only the
    /// requested, present attributes
    pub fn project(record: &EntityRecord, columns: &ColumnSet) -> EntityRecord {
        let mut projected = EntityRecord::with_id(record.entity_type(), record.id());
        for (name, value) in record.attributes() {
            if columns.contains(name) {
                projected.set(name.clone(), value.clone());
            }
        }
        projected
    }
}
