//! # folio-db
//!
//! libSQL persistence gateway for the Folio portfolio resources.
//!
//! Handles all stored state: experiences and projects. Records live in one
//! table per resource; composite `UNIQUE` constraints enforce each
//! resource's uniqueness invariant, and the store assigns every record a
//! 24-hex identifier.
//!
//! Uses the `libsql` crate, which serves both local files (or `:memory:`)
//! and remote libSQL servers with the same API.

pub mod error;
pub mod helpers;
mod migrations;
pub mod provider;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use folio_core::ids::RecordId;
use libsql::Builder;

/// Central database handle.
///
/// Wraps a libSQL database and one connection shared by every repository
/// method.
pub struct FolioDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl FolioDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let folio_db = Self { db, conn };
        folio_db.run_migrations().await?;
        Ok(folio_db)
    }

    /// Open a remote libSQL database over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the server cannot be reached or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;

        let folio_db = Self { db, conn };
        folio_db.run_migrations().await?;
        Ok(folio_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a record identifier via libSQL, e.g. `"65a1f0c2b3d4e5f601234567"`.
    ///
    /// Uses `randomblob(12)` in SQL to produce 24 lower-case hex characters.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self) -> Result<RecordId, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT lower(hex(randomblob(12)))", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let raw = row.get::<String>(0)?;
        RecordId::parse(&raw).map_err(|e| DatabaseError::Query(e.to_string()))
    }
}
