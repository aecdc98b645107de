//! Service surface for fauxcrm
//!
//! [`FakedContext`] owns the seeded store; [`OrganizationService`] is the
//! handle code under test talks to, exposing the remote service's
//! contract: `retrieve`, `retrieve_multiple`, and bulk initialization.
//!
//! # Null-strip policy
//!
//! The remote service omits null-valued attributes from what it returns.
//! This layer reproduces that: every attribute whose (unwrapped) value is
//! null is removed from rows before they are handed back, while the
//! engine underneath keeps present-with-null semantics. Callers therefore
//! observe an explicitly-null attribute as *absent*, exactly like against
//! the live service.

mod context;
mod errors;
mod service;

pub use context::FakedContext;
pub use errors::{ServiceError, ServiceResult};
pub use service::OrganizationService;
