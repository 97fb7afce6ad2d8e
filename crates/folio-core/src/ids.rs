//! Store-assigned record identifiers.
//!
//! Every record carries an opaque 24-character hexadecimal token assigned by
//! the store at creation. The token is immutable once assigned.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Length of a record identifier in characters.
pub const RECORD_ID_LEN: usize = 24;

/// Opaque 24-hex-character record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct RecordId(#[schemars(regex(pattern = r"^[0-9a-f]{24}$"))] String);

impl RecordId {
    /// Parse an untrusted identifier string.
    ///
    /// Upper-case hex digits are accepted and normalized to lower case so
    /// lookups match the store's canonical form.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidId` unless `raw` is exactly 24 ASCII hex digits.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if raw.len() == RECORD_ID_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Self(raw.to_ascii_lowercase()))
        } else {
            Err(CoreError::InvalidId(raw.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RecordId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
