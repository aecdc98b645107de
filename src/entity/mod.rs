//! Entity data model for fauxcrm
//!
//! An entity record is a `(type name, id)` identity plus a map from
//! attribute name to [`AttributeValue`]. The map distinguishes *presence*
//! from *value*: a key assigned `AttributeValue::Null` is present, a key
//! never assigned is absent. That distinction drives projection, filtering
//! and join semantics throughout the crate.

mod record;
mod value;

pub use record::EntityRecord;
pub use value::{AliasedValue, AttributeValue, EntityReference};
