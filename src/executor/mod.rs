//! Query executor subsystem for fauxcrm
//!
//! Evaluates a [`crate::query::QuerySpec`] against an
//! [`crate::store::EntityStore`], producing deterministic results.
//!
//! # Evaluation flow (strict order)
//!
//! 1. Reject unknown base type
//! 2. Validate every link's metadata, nested links included
//! 3. Scan the base type in insertion order
//! 4. Drop records failing the base filter
//! 5. Project each survivor's base columns
//! 6. Apply link entities in declaration order, expanding per match
//! 7. Return rows in scan order (no implied sort)
//!
//! # Invariants
//!
//! - Presence governs projection: explicit null is included, absent is not
//! - Aliased columns are derived freshly per row from the matched record;
//!   no state crosses from one row's match to the next
//! - Absence of join matches is a normal per-row outcome, never an error

mod evaluator;
mod filters;
mod links;
mod projector;
mod result;

pub use evaluator::QueryEvaluator;
pub use filters::ConditionFilter;
pub use links::LinkResolver;
pub use projector::ColumnProjector;
pub use result::ResultSet;
