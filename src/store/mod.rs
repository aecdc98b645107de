//! Entity store subsystem for fauxcrm
//!
//! An in-memory map from `(type name, id)` to [`crate::entity::EntityRecord`].
//!
//! # Invariants
//!
//! - Seeding is last-write-wins per identity; a re-seeded record keeps its
//!   original scan position.
//! - `scan` returns a cloned snapshot in insertion order; later seeds never
//!   show up in a snapshot already taken.
//! - The store owns its own copies; handing out a record never aliases
//!   store memory.

mod errors;
mod store;

pub use errors::{StoreError, StoreResult};
pub use store::EntityStore;
