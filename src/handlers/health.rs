use axum::{extract::State, response::Json};
use tracing::instrument;

use crate::schemas::{API_VERSION, AppState, HealthResponse, PingResponse, VersionResponse};

/// Version endpoint
pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: API_VERSION.to_string(),
    })
}

/// Liveness probe
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong".to_string(),
        version: API_VERSION.to_string(),
    })
}

/// Health check endpoint
#[instrument(skip_all)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    // Test database connection
    let db_status = match state.db.ping().await {
        Ok(_) => "connected".to_string(),
        Err(_) => "disconnected".to_string(),
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: API_VERSION.to_string(),
        database: db_status,
    })
}
