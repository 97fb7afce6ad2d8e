//! Service layer owning the database handle and the schema registry.
//!
//! `FolioService` wraps `FolioDb` (raw database access) and the process-wide
//! `SchemaRegistry` (stored-entity validation). All repo methods are
//! implemented as `impl FolioService`, making it the only writer.

use folio_schema::SchemaRegistry;

use crate::FolioDb;
use crate::error::DatabaseError;

/// Persistence gateway for experiences and projects.
///
/// Every update follows this protocol:
/// 1. Load the current record (absent → `None`)
/// 2. Merge the supplied fields
/// 3. Validate the merged record against the registered entity schema
/// 4. Execute the UPDATE (unique key collision → `DuplicateKey`)
pub struct FolioService {
    db: FolioDb,
    schema: &'static SchemaRegistry,
}

impl FolioService {
    /// Create a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = FolioDb::open_local(db_path).await?;
        Ok(Self::from_db(db))
    }

    /// Create a service over a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be reached.
    pub async fn new_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = FolioDb::open_remote(url, auth_token).await?;
        Ok(Self::from_db(db))
    }

    /// Create from an existing `FolioDb`.
    #[must_use]
    pub fn from_db(db: FolioDb) -> Self {
        Self {
            db,
            schema: SchemaRegistry::global(),
        }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &FolioDb {
        &self.db
    }

    /// Access the schema registry.
    #[must_use]
    pub const fn schema(&self) -> &'static SchemaRegistry {
        self.schema
    }
}
