//! Repository modules implementing CRUD for each resource.
//!
//! Each module adds methods to `FolioService` via `impl FolioService` blocks.
//! Lookups by id return `Ok(None)` when no record matches.

pub mod experience;
pub mod project;

use serde::Serialize;

use crate::error::DatabaseError;
use crate::service::FolioService;

impl FolioService {
    /// Check a merged record against its resource's stored-entity schema.
    pub(crate) fn check_merged<T: Serialize>(
        &self,
        resource: &str,
        record: &T,
    ) -> Result<(), DatabaseError> {
        let document = serde_json::to_value(record).map_err(|e| DatabaseError::Other(e.into()))?;
        self.schema().validate_document(resource, &document)?;
        Ok(())
    }
}
