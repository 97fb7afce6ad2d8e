//! Database error types for folio-db.

use folio_core::enums::ResourceKind;
use folio_schema::SchemaError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned data that could not be parsed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A write would give two records the same unique key.
    #[error("Duplicate key: a {resource} with the same unique fields already exists")]
    DuplicateKey { resource: ResourceKind },

    /// A merged record failed the stored-entity schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// The store could not be reached or opened.
#[derive(Debug, Error)]
#[error("Error with connecting to database: {source}")]
pub struct ConnectionError {
    #[from]
    source: DatabaseError,
}
