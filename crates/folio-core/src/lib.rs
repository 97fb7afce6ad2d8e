//! # folio-core
//!
//! Core types, record identifiers, and error types for Folio.
//!
//! This crate provides the foundational types shared across all Folio crates:
//! - Entity structs for the portfolio resources (experiences, projects)
//! - Creation drafts and partial-update types with their builders
//! - The 24-hex record identifier
//! - Resource kinds and field issue codes
//! - The JSON response envelope
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
pub mod updates;
