//! Serde roundtrip and JsonSchema validation tests for the stored entities.

use chrono::{TimeZone, Utc};
use schemars::schema_for;
use folio_core::entities::{Experience, Project};
use folio_core::ids::RecordId;
use folio_core::responses::Envelope;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn id(raw: &str) -> RecordId {
    RecordId::parse(raw).unwrap()
}

roundtrip_and_validate!(
    experience_roundtrip,
    Experience,
    Experience {
        id: id("65a1f0c2b3d4e5f601234567"),
        company: "Acme".into(),
        title: "Engineer".into(),
        location: Some("West Lafayette, IN".into()),
        start_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        end_date: None,
        description: Some("Built internal tooling".into()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    project_roundtrip,
    Project,
    Project {
        id: id("65a1f0c2b3d4e5f6012345ff"),
        name: "Portfolio".into(),
        start_date: Utc.with_ymd_and_hms(2023, 6, 15, 0, 0, 0).unwrap(),
        end_date: Some(Utc.with_ymd_and_hms(2023, 9, 1, 0, 0, 0).unwrap()),
        description: None,
        deployment_link: Some("https://example.dev".into()),
        github_link: Some("https://github.com/example/portfolio".into()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

#[test]
fn experience_uses_store_field_names() {
    let exp = Experience {
        id: id("65a1f0c2b3d4e5f601234567"),
        company: "Acme".into(),
        title: "Engineer".into(),
        location: None,
        start_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        end_date: None,
        description: None,
        created_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
    };
    let json = serde_json::to_value(&exp).unwrap();
    assert_eq!(json["_id"], "65a1f0c2b3d4e5f601234567");
    assert_eq!(json["startDate"], "2024-01-01T00:00:00Z");
    assert!(json["endDate"].is_null());
    assert!(json.get("id").is_none());
}

#[test]
fn envelope_wraps_entity_collection() {
    let envelope: Envelope<Vec<Project>> = Envelope::ok(Vec::new());
    let json = serde_json::to_value(&envelope).unwrap();
    assert_eq!(json, serde_json::json!({ "success": true, "data": [] }));
}
