//! Result types for query evaluation

use crate::entity::EntityRecord;

/// Result of evaluating a query
///
/// Each row is a fresh record carrying the base record's identity; joined
/// columns sit under `<alias>.<attribute>` keys. Rows share no storage
/// with the store.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    /// Result rows, in scan order
    pub rows: Vec<EntityRecord>,
    /// Number of base records scanned
    pub scanned: usize,
}

impl ResultSet {
    /// Creates an empty result
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of result rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if no row matched
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the rows in result order
    pub fn iter(&self) -> impl Iterator<Item = &EntityRecord> {
        self.rows.iter()
    }
}

impl IntoIterator for ResultSet {
    type Item = EntityRecord;
    type IntoIter = std::vec::IntoIter<EntityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
