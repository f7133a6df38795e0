//! HTTP service around the search engine
//!
//! Routes:
//! - `GET /search?q=<query>[&limit=<n>]`: JSON array of excerpt strings
//! - everything else: static files from the configured directory
//!
//! The searcher is built before the listener binds and shared read-only
//! through an `Arc`.

pub mod config;
pub mod error;
pub mod handlers;

pub use config::ServerConfig;
pub use error::ApiError;

use crate::search::Searcher;
use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the application router
pub fn router(searcher: Arc<Searcher>, static_dir: &Path) -> Router {
    Router::new()
        .route("/search", get(handlers::search))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(searcher)
}

/// Bind and serve until Ctrl+C
pub async fn serve(config: &ServerConfig, searcher: Arc<Searcher>) -> Result<()> {
    let app = router(searcher, &config.static_dir);

    let bind_addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    info!("Listening on port {}...", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
