//! Database connection configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// URL schemes that select a remote libSQL database.
const REMOTE_SCHEMES: [&str; 3] = ["libsql://", "http://", "https://"];

fn default_url() -> String {
    "folio.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Connection string. A `libsql://`, `http://` or `https://` URL selects a
    /// remote database; anything else is a local file path or `:memory:`.
    #[serde(default = "default_url")]
    pub url: String,

    /// Auth token for remote databases.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Whether `url` points at a remote libSQL server.
    pub fn is_remote(&self) -> bool {
        REMOTE_SCHEMES.iter().any(|scheme| self.url.starts_with(scheme))
    }

    /// Check the section has what its connection mode needs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty URL and
    /// `ConfigError::NotConfigured` for a remote URL without an auth token.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.url".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.is_remote() && self.auth_token.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "database".into(),
            });
        }
        Ok(())
    }
}
