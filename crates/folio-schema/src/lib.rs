//! # folio-schema
//!
//! Resource schema registry and request validation for Folio.
//!
//! This crate provides:
//! - `ResourceSchema`: field descriptors and unique key per resource
//! - `SchemaRegistry`: process-wide registry of resource schemas and the JSON
//!   Schemas of the stored entities, initialized once on first use
//! - The validation layer turning untrusted JSON (query strings, request
//!   bodies) into typed drafts and partial updates, or a `ValidationError`
//!   listing every violated field
//!
//! ## Architecture
//!
//! Entity types are defined in `folio-core` with `#[derive(JsonSchema)]`.
//! This crate imports those types and provides the registry and validation
//! layer. `folio-db` re-validates merged records against the registry before
//! writing; `folio-server` validates requests before any persistence call.

pub mod error;
pub mod fields;
pub mod registry;
pub mod validate;

pub use error::{SchemaError, ValidationError};
pub use fields::{FieldKind, FieldSpec, ResourceSchema};
pub use registry::SchemaRegistry;
