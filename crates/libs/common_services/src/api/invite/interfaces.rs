use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

// --- Request Payloads ---

#[derive(Serialize, Deserialize, Validate, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateInviteRequest {
    /// Address the invite is sent to.
    #[validate(email, custom(function = "validate_mail_address"))]
    pub email: String,
}

/// Recipients must also parse as a lettre `Address`, which is stricter than `validate(email)`.
fn validate_mail_address(email: &str) -> Result<(), ValidationError> {
    email
        .parse::<lettre::Address>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("email"))
}

// --- Responses ---

#[derive(Serialize, Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateInviteResponse {
    pub participant_id: Uuid,
}
