//! Handler errors and their HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::enums::ResourceKind;
use folio_core::responses::Envelope;
use folio_db::error::{ConnectionError, DatabaseError};
use folio_schema::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Error with connecting to database.")]
    Connection(#[from] ConnectionError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{} not found", .0.display_name())]
    NotFound(ResourceKind),

    #[error("{} with the same unique fields already exists", .0.display_name())]
    Conflict(ResourceKind),

    /// Store failure. Only `message` reaches the client.
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: DatabaseError,
    },
}

impl ApiError {
    /// Classify a gateway failure. `message` is what the client sees for
    /// failures that are neither conflicts nor schema violations.
    pub fn persistence(message: impl Into<String>, e: DatabaseError) -> Self {
        match e {
            DatabaseError::DuplicateKey { resource } => Self::Conflict(resource),
            DatabaseError::Schema(e) => Self::Validation(e.into()),
            source => Self::Internal {
                message: message.into(),
                source,
            },
        }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Connection(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Connection(ref e) => {
                tracing::error!(error = %e, "database unavailable");
                Envelope::<()>::failure(self.to_string())
            }
            Self::Internal {
                ref message,
                ref source,
            } => {
                tracing::error!(error = %source, "{message}");
                Envelope::failure(message.clone())
            }
            Self::Validation(e) => {
                let message = e.to_string();
                Envelope::invalid(message, e.into_issues())
            }
            Self::NotFound(_) | Self::Conflict(_) => {
                tracing::debug!(status = %status, "{self}");
                Envelope::failure(self.to_string())
            }
        };

        (status, Json(body)).into_response()
    }
}
