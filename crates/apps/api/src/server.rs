use crate::api_state::ApiContext;
use crate::create_router;
use app_state::AppSettings;
use axum::Router;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use common_services::database::PgTripStore;
use common_services::mail::create_mailer;
use http::{HeaderValue, Method, header};
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub async fn serve(pool: PgPool, settings: AppSettings) -> Result<()> {
    info!("🚀 Initializing server...");
    let context = ApiContext {
        store: Arc::new(PgTripStore::new(pool)),
        mailer: create_mailer(&settings.mail)?,
        settings: settings.clone(),
    };
    let app = create_app(context);

    let addr: SocketAddr = format!("{}:{}", settings.api.host, settings.api.port)
        .parse()
        .map_err(|e| eyre!("Invalid address: {}", e))?;
    let listener = TcpListener::bind(addr).await?;

    info!("🧳 Server listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Router with tracing and CORS layers applied.
pub fn create_app(context: ApiContext) -> Router {
    let allowed_origins: Vec<HeaderValue> = context
        .settings
        .api
        .allowed_origins
        .iter()
        .filter_map(|s| match s.parse() {
            Ok(hv) => Some(hv),
            Err(e) => {
                error!("Invalid CORS origin configured: {} - Error: {}", s, e);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]);

    create_router(context)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
