//! Request extractors that reject malformed input before a handler runs.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;
use tracing::debug;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Error)]
pub enum InputError {
    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error(transparent)]
    Path(#[from] PathRejection),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),
}

impl IntoResponse for InputError {
    fn into_response(self) -> Response {
        debug!("Rejected request input: {}", self);

        let (status, error_message) = match &self {
            Self::Json(rejection) => (rejection.status(), rejection.body_text()),
            Self::Path(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            Self::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

/// JSON body that is deserialized and then checked with `validator`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = InputError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}
