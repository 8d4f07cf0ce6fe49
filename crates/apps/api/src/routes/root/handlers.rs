use crate::routes::api_doc::ApiDoc;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use common_services::database::TripStore;
use std::sync::Arc;
use tracing::error;
use utoipa::OpenApi;

/// Placeholder liveness route.
#[utoipa::path(
    get,
    path = "/teste",
    tag = "System",
    responses(
        (status = 200, description = "Hello message", body = String)
    )
)]
pub async fn hello() -> &'static str {
    "Hello World"
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "API is healthy and ready to accept traffic", body = String),
        (status = 503, description = "API is not healthy, likely due to a database issue.")
    )
)]
pub async fn health_check(
    State(store): State<Arc<dyn TripStore>>,
) -> Result<&'static str, StatusCode> {
    match store.ping().await {
        Ok(()) => Ok("OK"),
        Err(e) => {
            error!("Health check failed: database connection error: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
