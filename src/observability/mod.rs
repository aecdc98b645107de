//! Observability for fauxcrm
//!
//! Structured, synchronous JSON logging with deterministic field order.
//! Read-only: logging never affects seeding or evaluation, and a test
//! run produces the same log lines for the same inputs.

mod logger;

pub use logger::{Logger, Severity};
