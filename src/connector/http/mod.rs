//! HTTP surface of the storefront: the chat endpoint and catalog browsing.

mod error;
pub mod handlers;
mod trace;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use tracing::info;

use crate::connector::api::Container;

pub use error::*;
pub use trace::*;

/// Builds the API router over a shared [`Container`].
pub fn routes(container: Arc<Container>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/chat", post(handlers::chat))
        .route("/api/products", get(handlers::list_products))
        .route("/api/products/{id}", get(handlers::get_product))
        .route("/api/niches", get(handlers::list_niches))
        .layer(axum::middleware::from_fn(trace_requests))
        .with_state(container)
}

/// Serves the API on `addr` until Ctrl-C.
pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Storefront API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, routes(container))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Storefront API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
