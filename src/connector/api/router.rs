use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use super::container::Container;
use super::controller;

pub fn build_router(container: Arc<Container>) -> Router {
    Router::new()
        .route("/", get(controller::health::health))
        .route("/api/chat", post(controller::chat::chat))
        .layer(CorsLayer::permissive())
        .with_state(container)
}

/// Bind the listener and serve until the process is terminated.
pub async fn serve(container: Arc<Container>, port: u16) -> Result<()> {
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    let router = build_router(container);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API endpoint: http://localhost:{port}/api/chat");
    axum::serve(listener, router).await?;
    Ok(())
}
