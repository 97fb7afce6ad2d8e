//! Process-wide schema registry.
//!
//! The `SchemaRegistry` pairs each resource's field descriptors with the JSON
//! Schema of its stored entity, built from folio-core types via
//! [`schemars::schema_for!`]. Validation of stored documents uses `jsonschema`.
//! The registry is built once, on first use of [`SchemaRegistry::global`], and
//! only read afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use folio_core::enums::ResourceKind;
use schemars::schema_for;

use crate::error::SchemaError;
use crate::fields::{EXPERIENCE, PROJECT, ResourceSchema};

static REGISTRY: OnceLock<SchemaRegistry> = OnceLock::new();

/// A registered resource: its field rules and stored-entity JSON Schema.
#[derive(Debug)]
pub struct RegisteredResource {
    pub schema: &'static ResourceSchema,
    pub json_schema: serde_json::Value,
}

/// Registry of resource schemas keyed by resource name.
#[derive(Debug)]
pub struct SchemaRegistry {
    resources: HashMap<&'static str, RegisteredResource>,
}

/// Insert a resource into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $schema:expr, $ty:ty) => {
        $map.insert(
            $schema.name(),
            RegisteredResource {
                schema: &$schema,
                json_schema: serde_json::to_value(schema_for!($ty)).unwrap(),
            },
        );
    };
}

impl SchemaRegistry {
    /// Build a registry holding every resource.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on a `schemars`-generated schema.
    #[must_use]
    pub fn new() -> Self {
        let mut resources = HashMap::new();

        register!(resources, EXPERIENCE, folio_core::entities::Experience);
        register!(resources, PROJECT, folio_core::entities::Project);

        Self { resources }
    }

    /// The shared registry, built on first call.
    ///
    /// # Panics
    ///
    /// Panics on first call if building the registry panics, see [`Self::new`].
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(Self::new)
    }

    /// Look up a resource by name. Returns `None` if not registered.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RegisteredResource> {
        self.resources.get(name)
    }

    /// Field rules for a resource kind.
    #[must_use]
    pub fn resource(&self, kind: ResourceKind) -> &'static ResourceSchema {
        self.get(kind.as_str())
            .map_or_else(|| ResourceSchema::for_kind(kind), |r| r.schema)
    }

    /// Stored-entity JSON Schema by resource name.
    #[must_use]
    pub fn json_schema(&self, name: &str) -> Option<&serde_json::Value> {
        self.get(name).map(|r| &r.json_schema)
    }

    /// Validate a stored document against a resource's entity schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the name is unknown, or
    /// `SchemaError::ValidationFailed` listing every validator error.
    pub fn validate_document(
        &self,
        name: &str,
        instance: &serde_json::Value,
    ) -> Result<(), SchemaError> {
        let schema = self
            .json_schema(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{}: {e}", e.instance_path))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered resource names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.resources.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_experience() -> serde_json::Value {
        serde_json::json!({
            "_id": "65a1f0c2b3d4e5f601234567",
            "company": "Acme",
            "title": "Engineer",
            "location": null,
            "startDate": "2024-01-01T00:00:00Z",
            "endDate": null,
            "description": null,
            "createdAt": "2024-02-01T10:00:00Z",
            "updatedAt": "2024-02-01T10:00:00Z"
        })
    }

    #[test]
    fn global_is_initialized_once() {
        let a = SchemaRegistry::global();
        let b = SchemaRegistry::global();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn lists_both_resources_sorted() {
        assert_eq!(SchemaRegistry::new().list(), vec!["experience", "project"]);
    }

    #[test]
    fn resource_lookup_by_kind() {
        let reg = SchemaRegistry::new();
        assert_eq!(reg.resource(ResourceKind::Project).table(), "projects");
        assert_eq!(reg.resource(ResourceKind::Experience).unique_key.len(), 3);
    }

    #[test]
    fn validate_accepts_stored_experience() {
        let reg = SchemaRegistry::new();
        assert!(reg.validate_document("experience", &valid_experience()).is_ok());
    }

    #[test]
    fn validate_collects_every_error() {
        let reg = SchemaRegistry::new();
        let mut doc = valid_experience();
        doc["company"] = serde_json::json!(42);
        doc["title"] = serde_json::json!(null);

        match reg.validate_document("experience", &doc) {
            Err(SchemaError::ValidationFailed { errors }) => {
                assert_eq!(errors.len(), 2, "{errors:?}");
            }
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_blank_required_text_and_bad_id() {
        let reg = SchemaRegistry::new();
        let mut doc = valid_experience();
        doc["title"] = serde_json::json!("");
        doc["_id"] = serde_json::json!("not-a-record-id");

        match reg.validate_document("experience", &doc) {
            Err(SchemaError::ValidationFailed { errors }) => {
                assert_eq!(errors.len(), 2, "{errors:?}");
            }
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_blank_project_name() {
        let reg = SchemaRegistry::new();
        let doc = serde_json::json!({
            "_id": "65a1f0c2b3d4e5f601234567",
            "name": "",
            "startDate": "2023-06-15T00:00:00Z",
            "endDate": null,
            "description": null,
            "deploymentLink": null,
            "githubLink": null,
            "createdAt": "2024-02-01T10:00:00Z",
            "updatedAt": "2024-02-01T10:00:00Z"
        });
        assert!(matches!(
            reg.validate_document("project", &doc),
            Err(SchemaError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn validate_unknown_resource_is_not_found() {
        let reg = SchemaRegistry::new();
        let result = reg.validate_document("skill", &serde_json::json!({}));
        assert!(matches!(result, Err(SchemaError::NotFound(_))));
    }
}
