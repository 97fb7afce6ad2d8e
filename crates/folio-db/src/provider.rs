//! Lazily established, process-wide store connection.
//!
//! The first request that needs the store opens it; later requests reuse the
//! same `FolioService`. A failed attempt is not cached, so the next request
//! retries.

use folio_config::DatabaseConfig;
use tokio::sync::OnceCell;

use crate::error::ConnectionError;
use crate::service::FolioService;

pub struct ConnectionProvider {
    config: DatabaseConfig,
    service: OnceCell<FolioService>,
}

impl ConnectionProvider {
    /// A provider that connects on first use.
    #[must_use]
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            service: OnceCell::new(),
        }
    }

    /// A provider over an already open service.
    #[must_use]
    pub fn from_service(service: FolioService) -> Self {
        Self {
            config: DatabaseConfig::default(),
            service: OnceCell::new_with(Some(service)),
        }
    }

    /// Return the shared service, opening the store if no connection exists yet.
    ///
    /// Concurrent first callers wait on a single connection attempt.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError` if the store cannot be opened.
    pub async fn connect_or_fail(&self) -> Result<&FolioService, ConnectionError> {
        self.service
            .get_or_try_init(|| async {
                let service = open(&self.config).await.inspect_err(|e| {
                    tracing::warn!(url = %self.config.url, error = %e, "database connection failed");
                })?;
                tracing::info!(url = %self.config.url, "database connected");
                Ok::<_, ConnectionError>(service)
            })
            .await
    }

    /// Whether a connection has been established.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.service.initialized()
    }
}

async fn open(config: &DatabaseConfig) -> Result<FolioService, ConnectionError> {
    let service = if config.is_remote() {
        FolioService::new_remote(&config.url, &config.auth_token).await?
    } else {
        FolioService::new_local(&config.url).await?
    };
    Ok(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn local(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            auth_token: String::new(),
        }
    }

    #[tokio::test]
    async fn connects_lazily_and_reuses_service() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("folio.db");
        let provider = ConnectionProvider::new(local(path.to_str().unwrap()));
        assert!(!provider.is_connected());

        let first = provider.connect_or_fail().await.unwrap();
        let second = provider.connect_or_fail().await.unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(provider.is_connected());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn failed_connection_is_not_cached() {
        let dir = TempDir::new().unwrap();
        let missing_parent = dir.path().join("absent").join("folio.db");
        let provider = ConnectionProvider::new(local(missing_parent.to_str().unwrap()));

        assert!(provider.connect_or_fail().await.is_err());
        assert!(!provider.is_connected());

        std::fs::create_dir_all(missing_parent.parent().unwrap()).unwrap();
        assert!(provider.connect_or_fail().await.is_ok());
        assert!(provider.is_connected());
    }

    #[tokio::test]
    async fn from_service_is_already_connected() {
        let service = FolioService::new_local(":memory:").await.unwrap();
        let provider = ConnectionProvider::from_service(service);
        assert!(provider.is_connected());
        assert!(provider.connect_or_fail().await.is_ok());
    }
}
