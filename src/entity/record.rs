//! Entity records
//!
//! Identity is `(entity_type, id)` and is immutable once constructed.
//! Attributes live in a `BTreeMap` so iteration order is deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value::{AliasedValue, AttributeValue, EntityReference};

/// A single entity record: typed identity plus an attribute map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    entity_type: String,
    id: Uuid,
    attributes: BTreeMap<String, AttributeValue>,
}

impl EntityRecord {
    /// Creates an empty record with a fresh random id
    pub fn new(entity_type: impl Into<String>) -> Self {
        Self::with_id(entity_type, Uuid::new_v4())
    }

    /// Creates an empty record with the given id
    pub fn with_id(entity_type: impl Into<String>, id: Uuid) -> Self {
        Self {
            entity_type: entity_type.into(),
            id,
            attributes: BTreeMap::new(),
        }
    }

    /// Returns the record's type name
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// Returns the record's id
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the conventional primary-key attribute name, `<type>id`
    pub fn primary_key_name(&self) -> String {
        format!("{}id", self.entity_type)
    }

    /// Assigns an attribute; `AttributeValue::Null` marks an explicit null
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Removes an attribute, making it absent again
    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        self.attributes.remove(name)
    }

    /// Returns the attribute value, if the attribute is present
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// Returns true if the attribute is present (explicit null counts)
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Resolves an attribute name to a value, honoring the pk convention
    ///
    /// The name `<entity_type>id` addresses the record's own id and yields
    /// a guid even though no such attribute is stored.
    pub fn resolve(&self, name: &str) -> Option<AttributeValue> {
        if name == self.primary_key_name() {
            return Some(AttributeValue::Guid(self.id));
        }
        self.attributes.get(name).cloned()
    }

    /// Returns a typed reference to this record
    pub fn to_reference(&self) -> EntityReference {
        EntityReference::new(self.entity_type.clone(), self.id)
    }

    /// Stores a joined column under its `<alias>.<attribute>` key
    pub fn set_aliased(
        &mut self,
        alias: &str,
        attribute: impl Into<String>,
        value: AttributeValue,
    ) {
        let attribute = attribute.into();
        let key = format!("{}.{}", alias, attribute);
        self.attributes
            .insert(key, AliasedValue::new(alias, attribute, value).into());
    }

    /// Returns the underlying value of a joined column, unwrapping the alias
    pub fn aliased_value(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key).map(AttributeValue::unaliased)
    }

    /// Iterates over present attributes in name order
    pub fn attributes(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.attributes.iter()
    }

    /// Present attribute names, in order
    pub fn attribute_names(&self) -> impl Iterator<Item = &String> {
        self.attributes.keys()
    }

    /// Number of present attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// True if no attribute is present
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
