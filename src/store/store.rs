//! In-memory entity store
//!
//! Records are grouped into per-type buckets. Each bucket keeps a
//! `HashMap` for identity lookup and a `Vec` of ids for insertion order,
//! so scans are deterministic without sorting by random ids.

use std::collections::HashMap;

use uuid::Uuid;

use crate::entity::EntityRecord;

use super::errors::{StoreError, StoreResult};

/// All records of one entity type
#[derive(Debug, Default, Clone)]
struct TypeBucket {
    /// Insertion order of record ids
    order: Vec<Uuid>,
    /// Records by id
    records: HashMap<Uuid, EntityRecord>,
}

impl TypeBucket {
    /// Inserts or replaces a record, keeping the original scan position
    fn upsert(&mut self, record: EntityRecord) {
        let id = record.id();
        if self.records.insert(id, record).is_none() {
            self.order.push(id);
        }
    }
}

/// In-memory map from `(type name, id)` to entity record
#[derive(Debug, Default, Clone)]
pub struct EntityStore {
    buckets: HashMap<String, TypeBucket>,
}

impl EntityStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-loads records, last-write-wins on duplicate identity
    pub fn seed(&mut self, records: impl IntoIterator<Item = EntityRecord>) {
        for record in records {
            self.insert(record);
        }
    }

    /// Inserts or replaces a single record
    pub fn insert(&mut self, record: EntityRecord) {
        self.buckets
            .entry(record.entity_type().to_string())
            .or_default()
            .upsert(record);
    }

    /// Looks up a record by identity, returning the store's own copy
    pub fn get(&self, entity_type: &str, id: Uuid) -> StoreResult<EntityRecord> {
        self.buckets
            .get(entity_type)
            .and_then(|bucket| bucket.records.get(&id))
            .cloned()
            .ok_or_else(|| StoreError::not_found(entity_type, id))
    }

    /// Returns a cloned snapshot of all records of a type, in insertion order
    pub fn scan(&self, entity_type: &str) -> Vec<EntityRecord> {
        let Some(bucket) = self.buckets.get(entity_type) else {
            return Vec::new();
        };
        bucket
            .order
            .iter()
            .filter_map(|id| bucket.records.get(id))
            .cloned()
            .collect()
    }

    /// True if at least one record of the type was ever seeded
    pub fn contains_type(&self, entity_type: &str) -> bool {
        self.buckets.contains_key(entity_type)
    }

    /// True if the attribute name is addressable on the given type
    ///
    /// The conventional pk attribute `<type>id` is always addressable;
    /// anything else must be present on at least one stored record.
    pub fn has_attribute(&self, entity_type: &str, attribute: &str) -> bool {
        if attribute.strip_suffix("id") == Some(entity_type) {
            return true;
        }
        self.buckets
            .get(entity_type)
            .map(|bucket| bucket.records.values().any(|r| r.contains(attribute)))
            .unwrap_or(false)
    }

    /// Total number of stored records across all types
    pub fn len(&self) -> usize {
        self.buckets.values().map(|b| b.records.len()).sum()
    }

    /// True if nothing has been seeded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::AttributeValue;

    #[test]
    fn test_get_returns_seeded_record() {
        let mut record = EntityRecord::new("testentity");
        record.set("field", "value");
        let id = record.id();

        let mut store = EntityStore::new();
        store.seed(vec![record.clone()]);

        assert_eq!(store.get("testentity", id).unwrap(), record);
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let mut store = EntityStore::new();
        store.seed(vec![EntityRecord::new("testentity")]);

        let id = Uuid::new_v4();
        let err = store.get("testentity", id).unwrap_err();
        assert_eq!(err, StoreError::not_found("testentity", id));
    }

    #[test]
    fn test_reseed_is_last_write_wins() {
        let mut first = EntityRecord::new("testentity");
        first.set("field", "old");
        let mut second = EntityRecord::with_id("testentity", first.id());
        second.set("field", "new");

        let mut store = EntityStore::new();
        store.seed(vec![first, second.clone()]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("testentity", second.id()).unwrap(), second);
    }

    #[test]
    fn test_reseed_keeps_scan_position() {
        let a = EntityRecord::new("testentity");
        let b = EntityRecord::new("testentity");
        let a_updated = EntityRecord::with_id("testentity", a.id());

        let mut store = EntityStore::new();
        store.seed(vec![a.clone(), b.clone(), a_updated]);

        let ids: Vec<Uuid> = store.scan("testentity").iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![a.id(), b.id()]);
    }

    #[test]
    fn test_scan_is_insertion_ordered() {
        let records: Vec<EntityRecord> =
            (0..5).map(|_| EntityRecord::new("testentity")).collect();
        let ids: Vec<Uuid> = records.iter().map(|r| r.id()).collect();

        let mut store = EntityStore::new();
        store.seed(records);

        let scanned: Vec<Uuid> = store.scan("testentity").iter().map(|r| r.id()).collect();
        assert_eq!(scanned, ids);
    }

    #[test]
    fn test_scan_snapshot_is_isolated() {
        let mut store = EntityStore::new();
        store.seed(vec![EntityRecord::new("testentity")]);

        let snapshot = store.scan("testentity");
        store.seed(vec![EntityRecord::new("testentity")]);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.scan("testentity").len(), 2);
    }

    #[test]
    fn test_null_only_record_is_discoverable() {
        let mut record = EntityRecord::new("parent");
        record.set("field", AttributeValue::Null);

        let mut store = EntityStore::new();
        store.seed(vec![record.clone()]);

        assert_eq!(store.scan("parent").len(), 1);
        assert!(store.get("parent", record.id()).is_ok());
    }

    #[test]
    fn test_has_attribute() {
        let mut record = EntityRecord::new("parent");
        record.set("field", AttributeValue::Null);

        let mut store = EntityStore::new();
        store.seed(vec![record]);

        // pk convention, present attribute (even null), absent attribute
        assert!(store.has_attribute("parent", "parentid"));
        assert!(store.has_attribute("parent", "field"));
        assert!(!store.has_attribute("parent", "nope"));
        assert!(!store.has_attribute("unknown", "field"));
    }

    #[test]
    fn test_store_copy_is_independent() {
        let mut record = EntityRecord::new("testentity");
        record.set("field", "value");
        let id = record.id();

        let mut store = EntityStore::new();
        store.seed(vec![record]);

        let mut copy = store.get("testentity", id).unwrap();
        copy.set("field", "mutated");

        let fresh = store.get("testentity", id).unwrap();
        assert_eq!(fresh.get("field"), Some(&AttributeValue::from("value")));
    }
}
