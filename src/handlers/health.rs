//! Health check handlers

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::{constants::health::BACKEND_RUNNING, services::HealthService, state::AppState};

/// Root banner response
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}

/// Backend and database status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub backend: String,
    pub database: String,
}

/// Root endpoint
async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("{} running", state.config().server.service_name),
    })
}

/// Status endpoint with a best-effort store connectivity check
async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        backend: BACKEND_RUNNING.to_string(),
        database: HealthService::database_status(state.store()).await,
    })
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/test", get(status))
}
