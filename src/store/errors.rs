//! # Store Errors
//!
//! Error types for the entity store.

use thiserror::Error;
use uuid::Uuid;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Entity store errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// No record with the given identity exists
    #[error("{entity_type} with id {id} does not exist")]
    NotFound {
        /// Requested type name
        entity_type: String,
        /// Requested id
        id: Uuid,
    },
}

impl StoreError {
    /// Creates a not-found error for the given identity
    pub fn not_found(entity_type: impl Into<String>, id: Uuid) -> Self {
        StoreError::NotFound {
            entity_type: entity_type.into(),
            id,
        }
    }
}
