//! fauxcrm - a deterministic, in-memory fake of a CRM organization service
//!
//! Seed an [`service::FakedContext`] with entity records, then exercise code
//! under test against its [`service::OrganizationService`]: single retrieval,
//! query-expression evaluation, and link-entity (join) resolution, with the
//! remote service's attribute presence/null semantics reproduced faithfully.

pub mod entity;
pub mod executor;
pub mod observability;
pub mod query;
pub mod service;
pub mod store;
