//! Health check handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;

use common::AppResult;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
    /// Number of records currently in the store
    pub users: usize,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - reports the store size.
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let users = state.user_service.count_users().await?;

    Ok(Json(HealthResponse {
        status: "healthy",
        service: state.config.server.service_name.clone(),
        users,
    }))
}
