mod api_doc;
pub mod extract;
pub mod root;
pub mod trips;

use crate::api_state::ApiContext;
use crate::root::router::root_public_router;
use crate::trips::router::trips_public_router;
use axum::Router;

// --- Router Construction ---
pub fn create_router(api_state: ApiContext) -> Router {
    Router::new()
        .merge(root_public_router())
        .merge(trips_public_router())
        .with_state(api_state)
}
