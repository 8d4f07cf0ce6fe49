use crate::api::invite::error::InviteError;
use crate::database::{NewParticipant, Participant, TripStore};
use crate::mail::{InviteEmail, InviteEmailContext, MailMessage, Mailer, Sender};
use crate::utils::format_long_date;
use app_state::AppSettings;
use tracing::{info, instrument};
use uuid::Uuid;

/// Link the participant follows to confirm attendance.
#[must_use]
pub fn confirmation_link(base_url: &str, participant_id: Uuid) -> String {
    format!(
        "{}/trips/{participant_id}/confirm",
        base_url.trim_end_matches('/')
    )
}

/// Invites `email` to a trip: stores a new participant and mails them a confirmation link.
///
/// The participant row is kept even when sending the mail fails afterwards.
///
/// # Errors
///
/// * `InviteError::TripNotFound` if no trip has this id. Nothing is written in that case.
/// * `InviteError::Database` / `InviteError::Mail` when the store or the mail transport fails.
#[instrument(skip(store, mailer, settings))]
pub async fn create_invite(
    store: &dyn TripStore,
    mailer: &dyn Mailer,
    settings: &AppSettings,
    trip_id: Uuid,
    email: &str,
) -> Result<Participant, InviteError> {
    let trip = store
        .find_trip(trip_id)
        .await?
        .ok_or(InviteError::TripNotFound)?;

    let participant = store
        .create_participant(&NewParticipant {
            email: email.to_string(),
            trip_id,
        })
        .await?;

    let mail_settings = &settings.mail;
    let starts_at = format_long_date(trip.starts_at, mail_settings.timezone, mail_settings.locale);
    let ends_at = format_long_date(trip.ends_at, mail_settings.timezone, mail_settings.locale);
    let link = confirmation_link(&settings.api.base_url, participant.id);

    let content = InviteEmail::new(
        &InviteEmailContext {
            destination: &trip.destination,
            starts_at: &starts_at,
            ends_at: &ends_at,
            confirmation_link: &link,
        },
        mail_settings.locale,
    );

    let sent = mailer
        .send(&MailMessage {
            from: Sender {
                name: mail_settings.from_name.clone(),
                address: mail_settings.from_address.clone(),
            },
            to: participant.email.clone(),
            subject: content.subject,
            html: content.html,
        })
        .await?;

    info!(
        participant_id = %participant.id,
        message_id = %sent.message_id,
        preview_url = sent.preview_url.as_deref(),
        "Invite mail sent"
    );

    Ok(participant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryTripStore;
    use crate::mail::RecordingMailer;
    use app_state::{
        ApiSettings, DatabaseSettings, LoggingSettings, MailLocale, MailSettings, MailTransport,
    };
    use chrono::{TimeZone, Utc};
    use std::path::PathBuf;

    fn settings() -> AppSettings {
        AppSettings {
            api: ApiSettings {
                host: "127.0.0.1".to_string(),
                port: 3333,
                base_url: "http://localhost:3333".to_string(),
                allowed_origins: vec![],
            },
            database: DatabaseSettings {
                url: "postgres://localhost/planner".to_string(),
                max_connections: 1,
                min_connections: 0,
                max_lifetime: 60,
                idle_timeout: 60,
                acquire_timeout: 1,
            },
            mail: MailSettings {
                transport: MailTransport::File(PathBuf::from("mail")),
                locale: MailLocale::PtBr,
                timezone: chrono_tz::UTC,
                from_name: "Equipe Planner".to_string(),
                from_address: "oi@plann.er".to_string(),
            },
            logging: LoggingSettings {
                level: "info".to_string(),
            },
        }
    }

    #[test]
    fn confirmation_link_does_not_double_slashes() {
        let id = Uuid::nil();
        assert_eq!(
            confirmation_link("http://localhost:3333/", id),
            format!("http://localhost:3333/trips/{id}/confirm")
        );
    }

    #[tokio::test]
    async fn invites_participant_and_sends_one_mail() {
        let store = MemoryTripStore::new();
        let mailer = RecordingMailer::new();
        let trip = store
            .add_trip(
                "Florianópolis",
                Utc.with_ymd_and_hms(2024, 4, 17, 12, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2024, 4, 21, 12, 0, 0).unwrap(),
            )
            .await;

        let participant = create_invite(&store, &mailer, &settings(), trip.id, "ana@example.com")
            .await
            .unwrap();

        assert_eq!(participant.email, "ana@example.com");
        assert_eq!(participant.trip_id, trip.id);
        assert_eq!(store.participants().await, vec![participant.clone()]);

        let sent = mailer.sent().await;
        assert_eq!(sent.len(), 1);
        let mail = &sent[0];
        assert_eq!(mail.to, "ana@example.com");
        assert_eq!(mail.from.address, "oi@plann.er");
        assert!(mail.subject.contains("Florianópolis"));
        assert!(mail.html.contains("17 de abril de 2024"));
        assert!(mail.html.contains("21 de abril de 2024"));
        assert!(mail.html.contains(&format!(
            "http://localhost:3333/trips/{}/confirm",
            participant.id
        )));
    }

    #[tokio::test]
    async fn unknown_trip_writes_nothing() {
        let store = MemoryTripStore::new();
        let mailer = RecordingMailer::new();

        let err = create_invite(&store, &mailer, &settings(), Uuid::new_v4(), "bob@example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, InviteError::TripNotFound));
        assert_eq!(err.to_string(), "Trip not found.");
        assert!(store.participants().await.is_empty());
        assert!(mailer.sent().await.is_empty());
    }

    #[tokio::test]
    async fn failed_mail_keeps_participant() {
        let store = MemoryTripStore::new();
        let mailer = RecordingMailer::failing();
        let trip = store
            .add_trip(
                "Recife",
                Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2024, 6, 5, 12, 0, 0).unwrap(),
            )
            .await;

        let err = create_invite(&store, &mailer, &settings(), trip.id, "ana@example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, InviteError::Mail(_)));
        assert_eq!(store.participants().await.len(), 1);
    }
}
