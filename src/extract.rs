use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    response::Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use crate::error::ApiError;

/// JSON body extractor that also runs the body's `Validate` rules.
///
/// The body is decoded as JSON whatever `Content-Type` says, so clients
/// posting with `curl -d` still get through. Any rejection, from an unreadable
/// body to a failed presence check, becomes [`ApiError::InvalidInput`] so
/// clients always get `{"error": ...}`.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            debug!("Could not read request body: {}", rejection.body_text());
            ApiError::InvalidInput
        })?;

        let Json(value) = Json::<T>::from_bytes(&body).map_err(|rejection| {
            debug!("Rejected request body: {}", rejection.body_text());
            ApiError::InvalidInput
        })?;

        value.validate().map_err(|errors| {
            debug!("Request body failed validation: {}", errors);
            ApiError::InvalidInput
        })?;

        Ok(ValidatedJson(value))
    }
}
