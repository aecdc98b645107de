//! # Service Errors
//!
//! Error type for the organization-service surface. Wraps the store and
//! query taxonomies; all failures are synchronous and final, nothing is
//! retried.

use thiserror::Error;

use crate::query::QueryError;
use crate::store::StoreError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Organization-service errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// Single-record retrieval target does not exist
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The query itself is malformed
    #[error(transparent)]
    Query(#[from] QueryError),
}
