use axum::{extract::State, response::Json};
use tracing::{error, info, instrument, trace, warn};

use crate::auth::{AuthError, authenticate_user, register_user};
use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::schemas::{AppState, LoginRequest, MessageResponse, RegisterRequest};

/// Register a new user with the starting balance
///
/// Responds 200 with a confirmation, 400 on a malformed body and 500 when
/// the user could not be stored (duplicate email included).
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    trace!("Entering register handler");

    match register_user(&state.db, &request.name, &request.email, &request.password).await {
        Ok(_) => Ok(Json(MessageResponse::new("User created!"))),
        Err(e) => {
            error!("Failed to register user: {}", e);
            Err(ApiError::EmailInUse)
        }
    }
}

/// Check an email and password pair
///
/// No session or token is issued; a 200 only confirms the credentials.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    trace!("Entering login handler");

    match authenticate_user(&state.db, &request.email, &request.password).await {
        Ok(user_model) => {
            info!("Login succeeded for user ID: {}", user_model.id);
            Ok(Json(MessageResponse::new("Login OK!")))
        }
        Err(AuthError::WrongCredentials) => {
            warn!("Login rejected: wrong credentials");
            Err(ApiError::WrongCredentials)
        }
        Err(e) => {
            error!("Login failed: {}", e);
            Err(ApiError::WrongCredentials)
        }
    }
}
