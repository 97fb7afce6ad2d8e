//! Cross-cutting error types for Folio.
//!
//! Domain-specific errors (`ValidationError`, `DatabaseError`, `ApiError`) are
//! defined in their respective crates; this module holds errors raised by the
//! core types themselves.

use thiserror::Error;

/// Errors that can be raised by the core types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string is not a 24-character hexadecimal record identifier.
    #[error("Invalid record identifier: {0:?}")]
    InvalidId(String),

    /// A string does not name a known resource kind.
    #[error("Unknown resource kind: {0}")]
    UnknownResource(String),
}
