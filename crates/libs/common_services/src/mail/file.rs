use super::{MailError, MailMessage, Mailer, SentMail, build_message};
use async_trait::async_trait;
use lettre::{AsyncFileTransport, AsyncTransport, Tokio1Executor};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Development transport. Every message is written to `<dir>/<message id>.eml`.
pub struct FileMailer {
    dir: PathBuf,
    transport: AsyncFileTransport<Tokio1Executor>,
}

impl FileMailer {
    pub fn new(dir: &Path) -> Result<Self, MailError> {
        std::fs::create_dir_all(dir).map_err(|e| {
            MailError::InvalidConfig(format!("Cannot create mail folder {}: {e}", dir.display()))
        })?;
        let dir = std::path::absolute(dir).map_err(|e| {
            MailError::InvalidConfig(format!("Invalid mail folder {}: {e}", dir.display()))
        })?;

        Ok(Self {
            transport: AsyncFileTransport::<Tokio1Executor>::new(&dir),
            dir,
        })
    }
}

#[async_trait]
impl Mailer for FileMailer {
    #[instrument(skip_all, fields(to = %message.to))]
    async fn send(&self, message: &MailMessage) -> Result<SentMail, MailError> {
        let email = build_message(message)?;
        let message_id = self
            .transport
            .send(email)
            .await
            .map_err(|e| MailError::SendFailed(e.to_string()))?;

        let path = self.dir.join(format!("{message_id}.eml"));
        Ok(SentMail {
            preview_url: Some(format!("file://{}", path.display())),
            message_id,
        })
    }
}
