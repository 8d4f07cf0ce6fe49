use crate::api_state::ApiContext;
use crate::extract::{InputError, ValidatedJson};
use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use common_services::api::invite::error::InviteError;
use common_services::api::invite::interfaces::{CreateInviteRequest, CreateInviteResponse};
use common_services::api::invite::service::create_invite;
use tracing::instrument;
use uuid::Uuid;

/// Invite someone to a trip.
///
/// Creates a participant for the trip and emails them a confirmation link.
/// Inviting the same address twice creates two participants.
#[utoipa::path(
    post,
    path = "/trips/{trip_id}/invites",
    tag = "Trips",
    params(
        ("trip_id" = Uuid, Path, description = "The id of the trip.")
    ),
    request_body = CreateInviteRequest,
    responses(
        (status = 200, description = "Participant created and invite sent.", body = CreateInviteResponse),
        (status = 400, description = "Malformed trip id or email, or trip not found."),
        (status = 500, description = "A database or mail error occurred."),
    )
)]
#[instrument(skip(context, payload), err(Debug))]
pub async fn create_invite_handler(
    State(context): State<ApiContext>,
    WithRejection(Path(trip_id), _): WithRejection<Path<Uuid>, InputError>,
    ValidatedJson(payload): ValidatedJson<CreateInviteRequest>,
) -> Result<Json<CreateInviteResponse>, InviteError> {
    let participant = create_invite(
        context.store.as_ref(),
        context.mailer.as_ref(),
        &context.settings,
        trip_id,
        &payload.email,
    )
    .await?;

    Ok(Json(CreateInviteResponse {
        participant_id: participant.id,
    }))
}
