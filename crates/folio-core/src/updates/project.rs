//! Project update builder.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::Project;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Option<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_link: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_link: Option<Option<String>>,
}

impl ProjectUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.description.is_none()
            && self.deployment_link.is_none()
            && self.github_link.is_none()
    }

    #[must_use]
    pub fn apply_to(&self, current: &Project) -> Project {
        Project {
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            start_date: self.start_date.unwrap_or(current.start_date),
            end_date: self.end_date.unwrap_or(current.end_date),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| current.description.clone()),
            deployment_link: self
                .deployment_link
                .clone()
                .unwrap_or_else(|| current.deployment_link.clone()),
            github_link: self
                .github_link
                .clone()
                .unwrap_or_else(|| current.github_link.clone()),
            ..current.clone()
        }
    }
}

pub struct ProjectUpdateBuilder(ProjectUpdate);

impl ProjectUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ProjectUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
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
    pub fn deployment_link(mut self, deployment_link: Option<String>) -> Self {
        self.0.deployment_link = Some(deployment_link);
        self
    }

    #[must_use]
    pub fn github_link(mut self, github_link: Option<String>) -> Self {
        self.0.github_link = Some(github_link);
        self
    }

    #[must_use]
    pub fn build(self) -> ProjectUpdate {
        self.0
    }
}

impl Default for ProjectUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
