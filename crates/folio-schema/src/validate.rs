//! Validation layer: untrusted JSON in, typed values out.
//!
//! Request bodies are checked field by field against the resource's
//! [`ResourceSchema`]. Every field is checked before returning, so a failure
//! lists all violated fields. A failure never yields a partially populated
//! draft or update.
//!
//! Fields absent from the schema (including `_id`) are ignored and never
//! reach the store.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use folio_core::entities::{NewExperience, NewProject};
use folio_core::enums::{IssueCode, ResourceKind};
use folio_core::ids::RecordId;
use folio_core::responses::{FieldIssue, FieldIssues};
use folio_core::updates::{ExperienceUpdate, ProjectUpdate};
use serde_json::Value;
use url::Url;

use crate::error::ValidationError;
use crate::fields::{EXPERIENCE, FieldKind, FieldSpec, PROJECT, ResourceSchema};

/// Whether a payload is a full creation body or a partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Update,
}

enum Typed {
    Text(String),
    Date(DateTime<Utc>),
}

/// Values that passed their field rules. `None` marks an optional field
/// explicitly cleared (null or empty string).
struct Fields(BTreeMap<&'static str, Option<Typed>>);

impl Fields {
    fn text(&mut self, name: &str) -> Option<Option<String>> {
        self.0.remove(name).map(|value| match value {
            Some(Typed::Text(s)) => Some(s),
            _ => None,
        })
    }

    fn date(&mut self, name: &str) -> Option<Option<DateTime<Utc>>> {
        self.0.remove(name).map(|value| match value {
            Some(Typed::Date(d)) => Some(d),
            _ => None,
        })
    }

    fn required_text(&mut self, name: &str) -> Result<String, ValidationError> {
        self.text(name).flatten().ok_or_else(|| missing(name))
    }

    fn required_date(&mut self, name: &str) -> Result<DateTime<Utc>, ValidationError> {
        self.date(name).flatten().ok_or_else(|| missing(name))
    }
}

fn missing(name: &str) -> ValidationError {
    ValidationError::single(name, IssueCode::Required, format!("{name} is required"))
}

fn required_issue(spec: &FieldSpec) -> FieldIssue {
    FieldIssue::new(IssueCode::Required, format!("{} is required", spec.name))
}

/// Validate a raw `id` query parameter.
///
/// # Errors
///
/// `Required` on field `id` when absent, `InvalidIdentifierFormat` unless the
/// value is exactly 24 hexadecimal characters.
pub fn validate_id(raw: Option<&str>) -> Result<RecordId, ValidationError> {
    let raw = raw.ok_or_else(|| missing("id"))?;
    RecordId::parse(raw).map_err(|_| {
        ValidationError::single(
            "id",
            IssueCode::InvalidIdentifierFormat,
            "id must be a 24-character hexadecimal string",
        )
    })
}

/// Parse a strict `YYYY-MM-DD` calendar date as UTC midnight.
#[must_use]
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let bytes = raw.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// A well-formed absolute URL with a host (`https://…`, `http://…`).
#[must_use]
pub fn is_absolute_url(raw: &str) -> bool {
    Url::parse(raw).is_ok_and(|u| !u.cannot_be_a_base() && u.has_host())
}

/// `Ok(None)`: not supplied. `Ok(Some(None))`: cleared. `Ok(Some(Some(_)))`: value.
fn check_field(
    spec: &FieldSpec,
    value: Option<&Value>,
    mode: Mode,
) -> Result<Option<Option<Typed>>, FieldIssue> {
    let Some(value) = value else {
        return if spec.required && mode == Mode::Create {
            Err(required_issue(spec))
        } else {
            Ok(None)
        };
    };

    let raw = match value {
        Value::String(raw) => raw,
        Value::Null if spec.required => return Err(required_issue(spec)),
        Value::Null => return Ok(Some(None)),
        _ => {
            return Err(FieldIssue::new(
                IssueCode::InvalidType,
                format!("{} must be a string", spec.name),
            ));
        }
    };

    if raw.trim().is_empty() {
        return if spec.required {
            Err(required_issue(spec))
        } else {
            Ok(Some(None))
        };
    }

    let typed = match spec.kind {
        FieldKind::Text => Typed::Text(raw.clone()),
        FieldKind::Date => Typed::Date(parse_date(raw).ok_or_else(|| {
            FieldIssue::new(
                IssueCode::InvalidDateFormat,
                format!("{} must be a date in YYYY-MM-DD format", spec.name),
            )
        })?),
        FieldKind::Url if is_absolute_url(raw) => Typed::Text(raw.clone()),
        FieldKind::Url => {
            return Err(FieldIssue::new(
                IssueCode::InvalidUrlFormat,
                format!("{} must be an absolute URL", spec.name),
            ));
        }
    };
    Ok(Some(Some(typed)))
}

fn check_fields(
    schema: &ResourceSchema,
    payload: &Value,
    mode: Mode,
) -> Result<Fields, ValidationError> {
    let Some(object) = payload.as_object() else {
        return Err(ValidationError::single(
            "body",
            IssueCode::InvalidType,
            "request body must be a JSON object",
        ));
    };

    let mut issues = FieldIssues::new();
    let mut values = BTreeMap::new();
    for spec in schema.fields {
        match check_field(spec, object.get(spec.name), mode) {
            Ok(Some(value)) => {
                values.insert(spec.name, value);
            }
            Ok(None) => {}
            Err(issue) => {
                issues.insert(spec.name.to_string(), issue);
            }
        }
    }

    if issues.is_empty() {
        Ok(Fields(values))
    } else {
        Err(ValidationError::new(issues))
    }
}

/// Validate a creation body for an experience.
///
/// # Errors
///
/// Returns every violated field rule.
pub fn validate_new_experience(payload: &Value) -> Result<NewExperience, ValidationError> {
    let mut f = check_fields(&EXPERIENCE, payload, Mode::Create)?;
    Ok(NewExperience {
        company: f.required_text("company")?,
        title: f.required_text("title")?,
        location: f.text("location").flatten(),
        start_date: f.required_date("startDate")?,
        end_date: f.date("endDate").flatten(),
        description: f.text("description").flatten(),
    })
}

/// Validate a partial update body for an experience.
///
/// # Errors
///
/// Returns every violated field rule among the supplied fields.
pub fn validate_experience_update(payload: &Value) -> Result<ExperienceUpdate, ValidationError> {
    let mut f = check_fields(&EXPERIENCE, payload, Mode::Update)?;
    Ok(ExperienceUpdate {
        company: f.text("company").flatten(),
        title: f.text("title").flatten(),
        location: f.text("location"),
        start_date: f.date("startDate").flatten(),
        end_date: f.date("endDate"),
        description: f.text("description"),
    })
}

/// Validate a creation body for a project.
///
/// # Errors
///
/// Returns every violated field rule.
pub fn validate_new_project(payload: &Value) -> Result<NewProject, ValidationError> {
    let mut f = check_fields(&PROJECT, payload, Mode::Create)?;
    Ok(NewProject {
        name: f.required_text("name")?,
        start_date: f.required_date("startDate")?,
        end_date: f.date("endDate").flatten(),
        description: f.text("description").flatten(),
        deployment_link: f.text("deploymentLink").flatten(),
        github_link: f.text("githubLink").flatten(),
    })
}

/// Validate a partial update body for a project.
///
/// # Errors
///
/// Returns every violated field rule among the supplied fields.
pub fn validate_project_update(payload: &Value) -> Result<ProjectUpdate, ValidationError> {
    let mut f = check_fields(&PROJECT, payload, Mode::Update)?;
    Ok(ProjectUpdate {
        name: f.text("name").flatten(),
        start_date: f.date("startDate").flatten(),
        end_date: f.date("endDate"),
        description: f.text("description"),
        deployment_link: f.text("deploymentLink"),
        github_link: f.text("githubLink"),
    })
}

/// A validated creation payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draft {
    Experience(NewExperience),
    Project(NewProject),
}

/// A validated partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    Experience(ExperienceUpdate),
    Project(ProjectUpdate),
}

/// Validate a creation body for the given resource.
///
/// # Errors
///
/// Returns every violated field rule.
pub fn validate_create(kind: ResourceKind, payload: &Value) -> Result<Draft, ValidationError> {
    match kind {
        ResourceKind::Experience => validate_new_experience(payload).map(Draft::Experience),
        ResourceKind::Project => validate_new_project(payload).map(Draft::Project),
    }
}

/// Validate a partial update body for the given resource.
///
/// # Errors
///
/// Returns every violated field rule among the supplied fields.
pub fn validate_update(kind: ResourceKind, payload: &Value) -> Result<Patch, ValidationError> {
    match kind {
        ResourceKind::Experience => validate_experience_update(payload).map(Patch::Experience),
        ResourceKind::Project => validate_project_update(payload).map(Patch::Project),
    }
}
