//! Row-to-entity parsing and write helpers.
//!
//! Every repo needs to convert `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing logic and handle the dual datetime
//! format issue (`SQLite`'s `datetime('now')` vs Rust's `to_rfc3339()`).

use chrono::{DateTime, Utc};
use folio_core::enums::ResourceKind;
use folio_core::ids::RecordId;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<DateTime<Utc>>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_datetime(s: Option<&str>) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_datetime(s)?)),
        _ => Ok(None),
    }
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read the `id` column as a `RecordId`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the stored value is not a record identifier.
pub fn get_record_id(row: &libsql::Row, idx: i32) -> Result<RecordId, DatabaseError> {
    let raw = row.get::<String>(idx)?;
    RecordId::parse(&raw).map_err(|e| DatabaseError::Query(e.to_string()))
}

/// Convert an optional value to a libSQL parameter, NULL when absent.
pub fn opt_value<T: Into<libsql::Value>>(value: Option<T>) -> libsql::Value {
    value.map_or(libsql::Value::Null, Into::into)
}

/// Detect a violated `UNIQUE` constraint.
///
/// Local databases report `SQLITE_CONSTRAINT_UNIQUE`; remote (Hrana) databases
/// surface the same `SQLite` message inside their error text.
pub fn is_unique_violation(e: &libsql::Error) -> bool {
    e.to_string().contains("UNIQUE constraint failed")
}

/// Map a failed INSERT/UPDATE to `DuplicateKey` when the unique key collided.
pub fn classify_write_error(e: libsql::Error, resource: ResourceKind) -> DatabaseError {
    if is_unique_violation(&e) {
        DatabaseError::DuplicateKey { resource }
    } else {
        DatabaseError::LibSql(e)
    }
}

/// Dynamic `UPDATE ... SET` builder. Only pushed columns generate SET clauses.
pub struct SetClauses {
    sets: Vec<String>,
    params: Vec<libsql::Value>,
}

impl SetClauses {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sets: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn push(&mut self, column: &str, value: impl Into<libsql::Value>) {
        self.params.push(value.into());
        self.sets.push(format!("{column} = ?{}", self.params.len()));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Finish into `UPDATE {table} SET ... WHERE id = ?N` and its parameters.
    #[must_use]
    pub fn into_sql(mut self, table: &str, id: &RecordId) -> (String, Vec<libsql::Value>) {
        self.params.push(id.as_str().into());
        let sql = format!(
            "UPDATE {table} SET {} WHERE id = ?{}",
            self.sets.join(", "),
            self.params.len()
        );
        (sql, self.params)
    }
}

impl Default for SetClauses {
    fn default() -> Self {
        Self::new()
    }
}
