use crate::handlers::{
    auth::{login, register},
    health::{health_check, ping, version},
};
use crate::error::handle_middleware_error;
use crate::schemas::{API_VERSION, AppState};
use axum::{
    error_handling::HandleErrorLayer,
    http::{HeaderName, HeaderValue},
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Routes mounted under `/api`
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    create_router_with_timeout(state, REQUEST_TIMEOUT)
}

/// Same as [`create_router`] with a custom per-request timeout
pub fn create_router_with_timeout(state: AppState, timeout: Duration) -> Router {
    Router::new()
        // Probes
        .route("/version", get(version))
        .route("/ping", get(ping))
        .route("/health", get(health_check))
        .nest("/api", auth_routes())
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-api-version"),
                    HeaderValue::from_static(API_VERSION),
                ))
                .layer(CompressionLayer::new())
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(timeout)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
