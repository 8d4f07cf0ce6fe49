//! Outgoing mail.
//!
//! Transports implement [`Mailer`]. Which one is used is decided once at startup by
//! [`create_mailer`]; callers never branch on the transport, they only look at the
//! optional preview url in [`SentMail`].

mod file;
#[cfg(any(test, feature = "test-support"))]
mod recording;
mod smtp;
mod templates;

pub use file::FileMailer;
#[cfg(any(test, feature = "test-support"))]
pub use recording::RecordingMailer;
pub use smtp::SmtpMailer;
pub use templates::{InviteEmail, InviteEmailContext};

use app_state::{MailSettings, MailTransport};
use async_trait::async_trait;
use lettre::address::AddressError;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::{Address, Message};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid address {0}: {1}")]
    InvalidAddress(String, String),

    #[error("Failed to build email: {0}")]
    Build(String),

    #[error("Failed to send email: {0}")]
    SendFailed(String),

    #[error("Invalid mail configuration: {0}")]
    InvalidConfig(String),
}

/// Display name and address of the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub from: Sender,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Result of a successful send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub message_id: String,
    /// Where the sent message can be inspected, for transports that keep a copy.
    pub preview_url: Option<String>,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &MailMessage) -> Result<SentMail, MailError>;
}

/// Build the configured transport.
pub fn create_mailer(settings: &MailSettings) -> Result<Arc<dyn Mailer>, MailError> {
    match &settings.transport {
        MailTransport::Smtp(smtp) => Ok(Arc::new(SmtpMailer::new(smtp)?)),
        MailTransport::File(dir) => Ok(Arc::new(FileMailer::new(dir)?)),
    }
}

fn parse_mailbox(name: Option<&str>, address: &str) -> Result<Mailbox, MailError> {
    let parsed: Address = address
        .parse()
        .map_err(|e: AddressError| MailError::InvalidAddress(address.to_string(), e.to_string()))?;
    Ok(Mailbox::new(name.map(ToString::to_string), parsed))
}

fn build_message(message: &MailMessage) -> Result<Message, MailError> {
    Message::builder()
        .from(parse_mailbox(Some(&message.from.name), &message.from.address)?)
        .to(parse_mailbox(None, &message.to)?)
        .subject(message.subject.clone())
        .header(ContentType::TEXT_HTML)
        .body(message.html.clone())
        .map_err(|e| MailError::Build(e.to_string()))
}
