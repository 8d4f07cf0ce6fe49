use crate::routes::{root, trips};
use common_services::api::invite::interfaces::{CreateInviteRequest, CreateInviteResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::hello,
        root::handlers::health_check,
        trips::handlers::create_invite_handler,
    ),
    components(schemas(CreateInviteRequest, CreateInviteResponse)),
    tags(
        (name = "Planner", description = "Trip planner API"),
        (name = "Trips", description = "Trip invites"),
        (name = "System", description = "Liveness and health"),
    )
)]
pub struct ApiDoc;
