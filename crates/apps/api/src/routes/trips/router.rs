use crate::api_state::ApiContext;
use crate::trips::handlers::create_invite_handler;
use axum::{Router, routing::post};

pub fn trips_public_router() -> Router<ApiContext> {
    Router::new().route("/trips/{trip_id}/invites", post(create_invite_handler))
}
