//! Partial-update types for entity mutations.
//!
//! Each update struct has `Option` fields; only `Some` fields generate SET
//! clauses in the dynamic UPDATE SQL. Optional entity fields use
//! `Option<Option<T>>` so an update can distinguish "leave untouched" (`None`)
//! from "clear" (`Some(None)`).

pub mod experience;
pub mod project;

pub use experience::{ExperienceUpdate, ExperienceUpdateBuilder};
pub use project::{ProjectUpdate, ProjectUpdateBuilder};
