//! Organization service handle
//!
//! The caller-facing contract: single retrieval by identity and
//! query-expression evaluation. Both apply the wire-compat null-strip
//! described in the module docs before returning anything.

use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::entity::EntityRecord;
use crate::executor::{ColumnProjector, QueryEvaluator, ResultSet};
use crate::observability::Logger;
use crate::query::{ColumnSet, QuerySpec};
use crate::store::EntityStore;

use super::errors::ServiceResult;

/// Handle to the faked organization service
#[derive(Debug, Clone)]
pub struct OrganizationService {
    store: Arc<RwLock<EntityStore>>,
}

impl OrganizationService {
    /// Creates a handle over a shared store
    pub(crate) fn new(store: Arc<RwLock<EntityStore>>) -> Self {
        Self { store }
    }

    /// Retrieves a single record by identity, projected to the columns
    ///
    /// Fails with a not-found error if the identity is absent from the
    /// store. Null-valued attributes are stripped from the returned copy.
    pub fn retrieve(
        &self,
        entity_type: &str,
        id: Uuid,
        columns: &ColumnSet,
    ) -> ServiceResult<EntityRecord> {
        let store = self.store.read().unwrap();
        let record = store.get(entity_type, id)?;
        let projected = ColumnProjector::project(&record, columns);
        let result = strip_null_attributes(projected);

        Logger::info(
            "RETRIEVE_COMPLETE",
            &[
                ("entity", entity_type),
                ("attributes", &result.len().to_string()),
            ],
        );
        Ok(result)
    }

    /// Evaluates a query and returns its rows
    ///
    /// Errors are all-or-nothing; a malformed query yields no partial
    /// rows. Null-valued attributes (base and aliased) are stripped from
    /// every returned row.
    pub fn retrieve_multiple(&self, spec: &QuerySpec) -> ServiceResult<ResultSet> {
        let store = self.store.read().unwrap();
        let mut result = QueryEvaluator::evaluate(&store, spec)?;
        result.rows = result.rows.into_iter().map(strip_null_attributes).collect();

        Logger::info(
            "RETRIEVE_MULTIPLE_COMPLETE",
            &[
                ("entity", &spec.entity_type),
                ("rows", &result.len().to_string()),
                ("scanned", &result.scanned.to_string()),
            ],
        );
        Ok(result)
    }
}

/// Removes attributes whose (unwrapped) value is null
///
/// This is where explicit null becomes indistinguishable from absent, as
/// on the wire. Aliased columns wrapping a null are stripped too.
fn strip_null_attributes(record: EntityRecord) -> EntityRecord {
    let mut stripped = EntityRecord::with_id(record.entity_type(), record.id());
    for (name, value) in record.attributes() {
        if value.unaliased().is_null() {
            continue;
        }
        stripped.set(name.clone(), value.clone());
    }
    stripped
}
