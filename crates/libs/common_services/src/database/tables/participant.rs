use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One invited person on a trip.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub is_confirmed: bool,
    pub is_owner: bool,
    pub trip_id: Uuid,
}

/// Values needed to insert a participant. The id is generated by the store.
#[derive(Debug, Clone)]
pub struct NewParticipant {
    pub email: String,
    pub trip_id: Uuid,
}
