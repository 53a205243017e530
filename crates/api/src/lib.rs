//! User API Library
//!
//! HTTP entry point over the user service. Owns the process-wide store and
//! wires it through the repository and service layers into the router.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use user_service_lib::build_user_service;
use user_service_lib::infra::Database;

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the router around a freshly seeded store.
pub fn build_app(config: ApiConfig) -> axum::Router {
    let db = Arc::new(Database::seeded());
    create_router(AppState::new(build_user_service(db), config))
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr: SocketAddr = config.server.addr().parse()?;
    let service = config.server.service_name.clone();
    let app = build_app(config);

    info!(service = %service, "Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(service = %service, "Stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
