//! Field descriptors for each resource.
//!
//! Field names are the JSON (camelCase) names used in request bodies and
//! responses. Column names in the database are their `snake_case` forms.

use folio_core::enums::ResourceKind;

/// Value shape of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Calendar date, `YYYY-MM-DD` on input.
    Date,
    /// Absolute URL.
    Url,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub column: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    const fn required(name: &'static str, column: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            column,
            kind,
            required: true,
        }
    }

    const fn optional(name: &'static str, column: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            column,
            kind,
            required: false,
        }
    }
}

/// Declared shape and uniqueness constraint of one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSchema {
    pub kind: ResourceKind,
    pub fields: &'static [FieldSpec],
    /// Field names forming the composite unique key.
    pub unique_key: &'static [&'static str],
}

impl ResourceSchema {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    #[must_use]
    pub const fn table(&self) -> &'static str {
        self.kind.table()
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn for_kind(kind: ResourceKind) -> &'static Self {
        match kind {
            ResourceKind::Experience => &EXPERIENCE,
            ResourceKind::Project => &PROJECT,
        }
    }
}

pub static EXPERIENCE: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Experience,
    fields: &[
        FieldSpec::required("company", "company", FieldKind::Text),
        FieldSpec::required("title", "title", FieldKind::Text),
        FieldSpec::optional("location", "location", FieldKind::Text),
        FieldSpec::required("startDate", "start_date", FieldKind::Date),
        FieldSpec::optional("endDate", "end_date", FieldKind::Date),
        FieldSpec::optional("description", "description", FieldKind::Text),
    ],
    unique_key: &["company", "title", "startDate"],
};

pub static PROJECT: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Project,
    fields: &[
        FieldSpec::required("name", "name", FieldKind::Text),
        FieldSpec::required("startDate", "start_date", FieldKind::Date),
        FieldSpec::optional("endDate", "end_date", FieldKind::Date),
        FieldSpec::optional("description", "description", FieldKind::Text),
        FieldSpec::optional("deploymentLink", "deployment_link", FieldKind::Url),
        FieldSpec::optional("githubLink", "github_link", FieldKind::Url),
    ],
    unique_key: &["name", "startDate"],
};
