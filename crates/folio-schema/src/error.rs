//! Schema and validation error types.

use folio_core::enums::IssueCode;
use folio_core::responses::{FieldIssue, FieldIssues};
use thiserror::Error;

/// Errors from the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// JSON value did not pass schema validation.
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// Schema generation or compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),
}

/// Untrusted input failed one or more field rules.
///
/// Holds every violated field, not just the first one found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed: {} invalid field(s)", .issues.len())]
pub struct ValidationError {
    issues: FieldIssues,
}

impl ValidationError {
    /// Build from a non-empty set of issues.
    #[must_use]
    pub const fn new(issues: FieldIssues) -> Self {
        Self { issues }
    }

    /// A single issue on a single field.
    #[must_use]
    pub fn single(field: &str, code: IssueCode, message: impl Into<String>) -> Self {
        let mut issues = FieldIssues::new();
        issues.insert(field.to_string(), FieldIssue::new(code, message));
        Self { issues }
    }

    #[must_use]
    pub const fn issues(&self) -> &FieldIssues {
        &self.issues
    }

    #[must_use]
    pub fn into_issues(self) -> FieldIssues {
        self.issues
    }

    /// Issue code recorded for `field`, if any.
    #[must_use]
    pub fn code(&self, field: &str) -> Option<IssueCode> {
        self.issues.get(field).map(|issue| issue.code)
    }
}

impl From<SchemaError> for ValidationError {
    fn from(e: SchemaError) -> Self {
        match e {
            SchemaError::ValidationFailed { errors } => {
                Self::single("record", IssueCode::SchemaViolation, errors.join("; "))
            }
            other => Self::single("record", IssueCode::SchemaViolation, other.to_string()),
        }
    }
}
