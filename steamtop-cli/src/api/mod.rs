//! HTTP API.
//!
//! # Routes
//!
//! - `GET /` - Welcome document
//! - `GET /games?rows=&parallel=&concurrency=` - Top titles with details
//! - `GET /health` - Liveness check

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod error;
pub mod routes;
pub mod state;

pub use state::AppState;

/// Creates the router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/games", get(routes::games))
        .route("/health", get(routes::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Serves the API on `bind_address` until Ctrl-C.
pub async fn start_api_server(state: AppState, bind_address: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    let local = listener.local_addr().unwrap_or(bind_address);
    info!(address = %local, "API server listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("API server failed")?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler; run until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
