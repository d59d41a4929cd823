//! API Gateway Library
//!
//! HTTP front door for the directory, payment and query-layer services. The
//! same router runs as a local server or behind API Gateway on Lambda.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tracing::info;

use domain::SystemClock;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Connect the configured store and build the router.
pub async fn build_app(config: &GatewayConfig) -> Router {
    let store = config.store_backend.connect().await;
    let state = AppState::new(store, config, Arc::new(SystemClock));
    create_router(state)
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: GatewayConfig) -> Result<(), BoxError> {
    let app = build_app(&config).await;

    // Build address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Serve API Gateway proxy events from the Lambda runtime.
pub async fn run_lambda(config: GatewayConfig) -> Result<(), BoxError> {
    let app = build_app(&config).await;
    info!("Gateway running under Lambda");
    lambda_http::run(app).await
}
