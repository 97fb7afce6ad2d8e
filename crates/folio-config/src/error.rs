//! Errors raised while loading Folio settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A settings source could not be read or a value has the wrong type.
    #[error("Failed to read Folio settings: {0}")]
    Figment(#[from] figment::Error),

    /// A section lacks what its connection mode needs, e.g. a remote
    /// `[database]` without `auth_token`.
    #[error("Folio [{section}] settings are incomplete; set FOLIO_{}__* or add them to folio.toml", .section.to_uppercase())]
    NotConfigured { section: String },

    #[error("Folio setting '{field}' is invalid: {reason}")]
    InvalidValue { field: String, reason: String },
}
