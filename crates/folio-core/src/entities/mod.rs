//! Entity structs for the Folio portfolio resources.
//!
//! Each entity maps to a table in the libSQL database (see
//! `folio-db/migrations/001_initial.sql`). Stored entities derive `Serialize`,
//! `Deserialize`, and `JsonSchema`; their schemas are registered in
//! `folio-schema` and used to re-validate merged records on update.
//!
//! `New*` structs are validated creation drafts: every required field is
//! present and typed, no identifier or timestamps yet.

mod experience;
mod project;

pub use experience::{Experience, NewExperience};
pub use project::{NewProject, Project};
