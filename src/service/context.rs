//! Faked service context
//!
//! Owns the entity store behind a `RwLock`: one writer at seed time, any
//! number of concurrent readers during evaluation. Service handles share
//! the store through an `Arc`, so a context initialized on one thread is
//! visible to services handed to others.

use std::sync::{Arc, RwLock};

use crate::entity::EntityRecord;
use crate::observability::Logger;
use crate::store::EntityStore;

use super::service::OrganizationService;

/// The faked remote environment: a seedable in-memory store
#[derive(Debug, Default, Clone)]
pub struct FakedContext {
    store: Arc<RwLock<EntityStore>>,
}

impl FakedContext {
    /// Creates a context with an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-seeds the store; last write wins on duplicate identity
    pub fn initialize(&self, records: impl IntoIterator<Item = EntityRecord>) {
        let mut store = self.store.write().unwrap();
        store.seed(records);
        Logger::info("STORE_SEEDED", &[("records", &store.len().to_string())]);
    }

    /// Returns a service handle sharing this context's store
    pub fn service(&self) -> OrganizationService {
        OrganizationService::new(Arc::clone(&self.store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_services_share_the_store() {
        let context = FakedContext::new();
        let service = context.service();

        // Seeded after the handle was taken, still visible through it.
        let record = EntityRecord::new("testentity");
        let id = record.id();
        context.initialize(vec![record]);

        assert!(service
            .retrieve("testentity", id, &crate::query::ColumnSet::all())
            .is_ok());
    }

    #[test]
    fn test_initialize_twice_accumulates() {
        let context = FakedContext::new();
        context.initialize(vec![EntityRecord::new("testentity")]);
        context.initialize(vec![EntityRecord::new("testentity")]);

        let store = context.store.read().unwrap();
        assert_eq!(store.len(), 2);
    }
}
