//! Experience update builder.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::Experience;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Option<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

impl ExperienceUpdate {
    /// True when no field is supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.company.is_none()
            && self.title.is_none()
            && self.location.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.description.is_none()
    }

    /// Produce the record that results from applying this update to `current`.
    ///
    /// Timestamps are left as they are; the repository sets `updated_at`.
    #[must_use]
    pub fn apply_to(&self, current: &Experience) -> Experience {
        Experience {
            company: self.company.clone().unwrap_or_else(|| current.company.clone()),
            title: self.title.clone().unwrap_or_else(|| current.title.clone()),
            location: self.location.clone().unwrap_or_else(|| current.location.clone()),
            start_date: self.start_date.unwrap_or(current.start_date),
            end_date: self.end_date.unwrap_or(current.end_date),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| current.description.clone()),
            ..current.clone()
        }
    }
}

pub struct ExperienceUpdateBuilder(ExperienceUpdate);

impl ExperienceUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ExperienceUpdate::default())
    }

    #[must_use]
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.0.company = Some(company.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: Option<String>) -> Self {
        self.0.location = Some(location);
        self
    }

    #[must_use]
    pub fn start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.0.start_date = Some(start_date);
        self
    }

    #[must_use]
    pub fn end_date(mut self, end_date: Option<DateTime<Utc>>) -> Self {
        self.0.end_date = Some(end_date);
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(description);
        self
    }

    #[must_use]
    pub fn build(self) -> ExperienceUpdate {
        self.0
    }
}

impl Default for ExperienceUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ids::RecordId;

    fn sample() -> Experience {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Experience {
            id: RecordId::parse("0123456789abcdef01234567").unwrap(),
            company: "Acme".into(),
            title: "Engineer".into(),
            location: Some("Remote".into()),
            start_date: start,
            end_date: None,
            description: None,
            created_at: start,
            updated_at: start,
        }
    }

    #[test]
    fn empty_update_is_identity() {
        let update = ExperienceUpdateBuilder::new().build();
        assert!(update.is_empty());
        assert_eq!(update.apply_to(&sample()), sample());
    }

    #[test]
    fn apply_touches_only_supplied_fields() {
        let update = ExperienceUpdateBuilder::new()
            .description(Some("Updated".into()))
            .location(None)
            .build();
        assert!(!update.is_empty());

        let merged = update.apply_to(&sample());
        assert_eq!(merged.description.as_deref(), Some("Updated"));
        assert_eq!(merged.location, None);
        assert_eq!(merged.company, "Acme");
        assert_eq!(merged.title, "Engineer");
    }

    #[test]
    fn serializes_changed_fields_only() {
        let update = ExperienceUpdateBuilder::new().title("Lead").end_date(None).build();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "Lead", "endDate": null }));
    }
}
