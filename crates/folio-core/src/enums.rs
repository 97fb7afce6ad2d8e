//! Resource kinds and validation issue codes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ResourceKind
// ---------------------------------------------------------------------------

/// The two portfolio resources exposed under `/api/<resource>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Experience,
    Project,
}

impl ResourceKind {
    pub const ALL: [Self; 2] = [Self::Experience, Self::Project];

    /// Singular name used in routes and the schema registry.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::Project => "project",
        }
    }

    /// Backing table name.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Experience => "experiences",
            Self::Project => "projects",
        }
    }

    /// Capitalized name for user-facing messages.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Experience => "Experience",
            Self::Project => "Project",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "experience" => Ok(Self::Experience),
            "project" => Ok(Self::Project),
            other => Err(CoreError::UnknownResource(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// IssueCode
// ---------------------------------------------------------------------------

/// Machine-readable reason a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum IssueCode {
    /// Field missing, null, or an empty string where a value is required.
    Required,
    /// Field present with the wrong JSON type.
    InvalidType,
    /// Identifier is not exactly 24 hexadecimal characters.
    InvalidIdentifierFormat,
    /// Date is not a real calendar date in `YYYY-MM-DD` form.
    InvalidDateFormat,
    /// URL is not a well-formed absolute URL.
    InvalidUrlFormat,
    /// Merged record does not satisfy the stored entity schema.
    SchemaViolation,
}

impl IssueCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "Required",
            Self::InvalidType => "InvalidType",
            Self::InvalidIdentifierFormat => "InvalidIdentifierFormat",
            Self::InvalidDateFormat => "InvalidDateFormat",
            Self::InvalidUrlFormat => "InvalidUrlFormat",
            Self::SchemaViolation => "SchemaViolation",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_kind_roundtrips_through_str() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.as_str().parse::<ResourceKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_resource_is_rejected() {
        let err = "skill".parse::<ResourceKind>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownResource(ref s) if s == "skill"));
    }

    #[test]
    fn issue_code_serializes_as_variant_name() {
        let json = serde_json::to_value(IssueCode::InvalidDateFormat).unwrap();
        assert_eq!(json, serde_json::json!("InvalidDateFormat"));
    }
}
