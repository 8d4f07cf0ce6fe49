use crate::api_state::ApiContext;
use crate::root::handlers::{health_check, hello, openapi_json};
use axum::{Router, routing::get};

pub fn root_public_router() -> Router<ApiContext> {
    Router::new()
        .route("/teste", get(hello))
        .route("/health", get(health_check))
        .route("/openapi.json", get(openapi_json))
}
