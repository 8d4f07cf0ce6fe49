use app_state::AppSettings;
use axum::extract::FromRef;
use common_services::database::TripStore;
use common_services::mail::Mailer;
use std::sync::Arc;

/// Shared resources, built once at startup and handed to every request.
#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<dyn TripStore>,
    pub mailer: Arc<dyn Mailer>,
    pub settings: AppSettings,
}

impl FromRef<ApiContext> for Arc<dyn TripStore> {
    fn from_ref(state: &ApiContext) -> Self {
        state.store.clone()
    }
}
