//! # Query Errors
//!
//! Malformed-query errors. These fail the whole call immediately; no
//! partial result is ever returned. A join that simply matches nothing
//! is not an error.

use thiserror::Error;

/// Result type for query evaluation
pub type QueryResult<T> = Result<T, QueryError>;

/// Malformed-query errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The named entity type was never seeded
    #[error("unknown entity type '{0}'")]
    UnknownEntityType(String),

    /// A link's target attribute is addressable on no record of the type
    #[error("unknown join attribute '{attribute}' on entity type '{entity_type}'")]
    UnknownJoinAttribute {
        /// Link target type name
        entity_type: String,
        /// The join attribute that could not be resolved
        attribute: String,
    },
}

impl QueryError {
    /// Creates an unknown-join-attribute error
    pub fn unknown_join_attribute(
        entity_type: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Self {
        QueryError::UnknownJoinAttribute {
            entity_type: entity_type.into(),
            attribute: attribute.into(),
        }
    }
}
