use super::{MailError, MailMessage, Mailer, SentMail, build_message};
use app_state::SmtpSettings;
use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use tracing::{debug, instrument};

/// Production transport, delivers through an SMTP relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings) -> Result<Self, MailError> {
        let host = settings.host.as_str();
        let mut builder = if settings.use_tls {
            let tls_params = TlsParameters::new(host.to_string())
                .map_err(|e| MailError::InvalidConfig(format!("TLS configuration error: {e}")))?;

            // 465 is implicit TLS, everything else negotiates with STARTTLS.
            if settings.port == 465 {
                AsyncSmtpTransport::<Tokio1Executor>::relay(host)
                    .map_err(|e| MailError::InvalidConfig(format!("SMTP relay error: {e}")))?
                    .port(settings.port)
                    .tls(Tls::Wrapper(tls_params))
            } else {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
                    .map_err(|e| MailError::InvalidConfig(format!("SMTP relay error: {e}")))?
                    .port(settings.port)
                    .tls(Tls::Required(tls_params))
            }
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host).port(settings.port)
        };

        if let (Some(user), Some(pass)) = (&settings.username, &settings.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: builder.build(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    #[instrument(skip_all, fields(to = %message.to))]
    async fn send(&self, message: &MailMessage) -> Result<SentMail, MailError> {
        let email = build_message(message)?;
        let message_id = email
            .headers()
            .get_raw("Message-ID")
            .unwrap_or_default()
            .to_string();

        let response = self
            .transport
            .send(email)
            .await
            .map_err(|e| MailError::SendFailed(e.to_string()))?;
        debug!("SMTP relay answered {}", response.code());

        Ok(SentMail {
            message_id,
            preview_url: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(use_tls: bool, port: u16) -> SmtpSettings {
        SmtpSettings {
            host: "localhost".to_string(),
            port,
            username: Some("user".to_string()),
            password: Some("pass".to_string()),
            use_tls,
        }
    }

    #[tokio::test]
    async fn creates_plain_transport() {
        assert!(SmtpMailer::new(&settings(false, 1025)).is_ok());
    }

    #[tokio::test]
    async fn creates_tls_transports() {
        assert!(SmtpMailer::new(&settings(true, 465)).is_ok());
        assert!(SmtpMailer::new(&settings(true, 587)).is_ok());
    }
}
