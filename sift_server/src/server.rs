//! HTTP server for sift

use crate::routes;
use anyhow::Result;
use axum::Router;
use sift_store::StringService;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub service: StringService,
}

impl AppState {
    #[must_use]
    pub const fn new(service: StringService) -> Self {
        Self { service }
    }
}

/// Build the full router with every route and the trace layer attached.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::string_routes())
        .merge(routes::health_routes())
        .fallback(routes::not_found)
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until Ctrl-C.
pub async fn run(state: AppState, addr: &str) -> Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
