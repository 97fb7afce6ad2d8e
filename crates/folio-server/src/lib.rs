//! # folio-server
//!
//! HTTP surface of the Folio portfolio backend.
//!
//! Each resource is served at `/api/<resource>`:
//!
//! | Method | Query      | Body | Success |
//! |--------|------------|------|---------|
//! | GET    | none       | none | 200, every record |
//! | GET    | `id=<hex>` | none | 200, one record |
//! | POST   | none       | JSON | 201, created record |
//! | PUT    | `id=<hex>` | JSON | 200, updated record |
//! | DELETE | `id=<hex>` | none | 200, deleted record |
//!
//! Every request runs the same pipeline: acquire the store connection,
//! validate the identifier and body, call the persistence gateway, and wrap
//! the outcome in an [`Envelope`](folio_core::responses::Envelope).

pub mod app;
pub mod error;
pub mod handlers;
pub mod resource;
pub mod state;

pub use app::{router, serve};
pub use error::ApiError;
pub use state::AppState;
