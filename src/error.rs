use axum::{
    BoxError,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tower::timeout::error::Elapsed;
use tracing::{error, warn};

use crate::schemas::ErrorResponse;

/// Errors surfaced to API clients.
///
/// Messages are deliberately opaque: a failed registration never says which
/// field conflicted and a failed login never says whether the email exists.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("Invalid input")]
    InvalidInput,

    #[error("Wrong credentials")]
    WrongCredentials,

    #[error("Email already in use")]
    EmailInUse,

    #[error("Request timed out")]
    Timeout,

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput => StatusCode::BAD_REQUEST,
            ApiError::WrongCredentials => StatusCode::UNAUTHORIZED,
            ApiError::EmailInUse => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Turns errors raised by the middleware stack into API errors.
pub async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        warn!("Request timed out");
        ApiError::Timeout
    } else {
        error!("Unhandled middleware error: {}", err);
        ApiError::Internal
    }
}
