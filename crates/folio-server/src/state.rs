//! Shared handler state.

use std::sync::Arc;

use folio_db::error::ConnectionError;
use folio_db::provider::ConnectionProvider;
use folio_db::service::FolioService;

#[derive(Clone)]
pub struct AppState {
    provider: Arc<ConnectionProvider>,
}

impl AppState {
    #[must_use]
    pub fn new(provider: ConnectionProvider) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// The store connection, established on first use.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError` when the store cannot be opened.
    pub async fn service(&self) -> Result<&FolioService, ConnectionError> {
        self.provider.connect_or_fail().await
    }
}
