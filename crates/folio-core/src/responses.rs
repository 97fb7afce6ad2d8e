//! JSON response envelope shared by every `/api/*` endpoint.
//!
//! Every response, success or failure, has the shape
//! `{ success, data?, message?, errors? }`.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::IssueCode;

/// A single field-level validation problem.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FieldIssue {
    pub code: IssueCode,
    pub message: String,
}

impl FieldIssue {
    #[must_use]
    pub fn new(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Field name → issue, ordered by field name.
pub type FieldIssues = BTreeMap<String, FieldIssue>;

/// Uniform response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldIssues>,
}

impl<T> Envelope<T> {
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: None,
        }
    }

    #[must_use]
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            errors: None,
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            errors: None,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>, errors: FieldIssues) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            errors: Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ok_omits_absent_members() {
        let json = serde_json::to_value(Envelope::ok(vec![1, 2])).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "data": [1, 2] }));
    }

    #[test]
    fn failure_carries_message_only() {
        let json = serde_json::to_value(Envelope::<()>::failure("Experience not found")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "message": "Experience not found" })
        );
    }

    #[test]
    fn invalid_lists_field_issues() {
        let mut errors = FieldIssues::new();
        errors.insert(
            "startDate".into(),
            FieldIssue::new(IssueCode::InvalidDateFormat, "expected YYYY-MM-DD"),
        );
        let json = serde_json::to_value(Envelope::<()>::invalid("Validation failed", errors)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "message": "Validation failed",
                "errors": {
                    "startDate": { "code": "InvalidDateFormat", "message": "expected YYYY-MM-DD" }
                }
            })
        );
    }
}
