use crate::database::DbError;
use crate::mail::MailError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum InviteError {
    #[error("Trip not found.")]
    TripNotFound,

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Mail error: {0}")]
    Mail(#[from] MailError),
}

fn log_error(error: &InviteError) {
    match error {
        InviteError::TripNotFound => warn!("Invite -> trip not found"),
        InviteError::Database(e) => warn!("Invite -> database query failed: {}", e),
        InviteError::Mail(e) => warn!("Invite -> sending mail failed: {}", e),
    }
}

impl IntoResponse for InviteError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, error_message) = match self {
            Self::TripNotFound => (StatusCode::BAD_REQUEST, "Trip not found.".to_string()),
            Self::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "A database error occurred.".to_string(),
            ),
            Self::Mail(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected internal error occurred.".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for InviteError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(DbError::Sqlx(err))
    }
}
