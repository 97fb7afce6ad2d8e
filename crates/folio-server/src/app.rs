//! Router assembly and the server loop.

use anyhow::Context;
use axum::Router;
use axum::routing::get;
use folio_config::FolioConfig;
use folio_db::provider::ConnectionProvider;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers::{create, read, remove, update};
use crate::resource::{ExperienceResource, ProjectResource, Resource};
use crate::state::AppState;

fn resource_routes<R: Resource>() -> axum::routing::MethodRouter<AppState> {
    get(read::<R>)
        .post(create::<R>)
        .put(update::<R>)
        .delete(remove::<R>)
}

/// Build the API router. Methods other than GET, POST, PUT and DELETE answer 405.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/experience", resource_routes::<ExperienceResource>())
        .route("/api/project", resource_routes::<ProjectResource>())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM.
///
/// The store is not opened here; the first request that needs it connects.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(config: &FolioConfig) -> anyhow::Result<()> {
    let state = AppState::new(ConnectionProvider::new(config.database.clone()));

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::warn!(error = %e, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
