use super::{MailError, MailMessage, Mailer, SentMail, build_message};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Keeps every message in memory instead of delivering it.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<MailMessage>>,
    fail: bool,
}

impl RecordingMailer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose sends always fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            sent: Mutex::default(),
            fail: true,
        }
    }

    pub async fn sent(&self) -> Vec<MailMessage> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &MailMessage) -> Result<SentMail, MailError> {
        if self.fail {
            return Err(MailError::SendFailed("connection refused".to_string()));
        }
        build_message(message)?;
        let mut sent = self.sent.lock().await;
        sent.push(message.clone());
        let message_id = sent.len().to_string();
        Ok(SentMail {
            preview_url: Some(format!("memory://{message_id}")),
            message_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::Sender;

    fn message(to: &str) -> MailMessage {
        MailMessage {
            from: Sender {
                name: "Equipe Planner".to_string(),
                address: "oi@plann.er".to_string(),
            },
            to: to.to_string(),
            subject: "Hello".to_string(),
            html: "<p>Hi</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn records_sent_messages() {
        let mailer = RecordingMailer::new();

        let sent = mailer.send(&message("ana@example.com")).await.unwrap();

        assert_eq!(sent.preview_url.as_deref(), Some("memory://1"));
        assert_eq!(mailer.sent().await.len(), 1);
    }

    #[tokio::test]
    async fn rejects_recipients_a_real_transport_would_refuse() {
        let mailer = RecordingMailer::new();

        let err = mailer.send(&message("a..b@example.com")).await.unwrap_err();

        assert!(matches!(err, MailError::InvalidAddress(..)));
        assert!(mailer.sent().await.is_empty());
    }
}
