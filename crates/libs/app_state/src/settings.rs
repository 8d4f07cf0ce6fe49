use crate::{
    DatabaseSettings, LoggingSettings, MailLocale, MailTransportKind, RawSettings, SmtpSettings,
};
use chrono_tz::Tz;
use color_eyre::eyre::{Report, WrapErr, bail, eyre};
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub api: ApiSettings,
    pub database: DatabaseSettings,
    pub mail: MailSettings,
    pub logging: LoggingSettings,
}

/// Configuration for the API server.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub port: u16,
    /// Base url without trailing slash.
    pub base_url: String,
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct MailSettings {
    pub transport: MailTransport,
    pub locale: MailLocale,
    pub timezone: Tz,
    pub from_name: String,
    pub from_address: String,
}

/// Which transport outgoing mail goes through, with its transport specific settings.
#[derive(Debug, Clone)]
pub enum MailTransport {
    Smtp(SmtpSettings),
    /// Write messages as `.eml` files into a folder, for local development.
    File(PathBuf),
}

impl TryFrom<RawSettings> for AppSettings {
    type Error = Report;

    fn try_from(raw: RawSettings) -> Result<Self, Self::Error> {
        let base_url = match raw.api.base_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
            _ => bail!("API_BASE_URL is not set"),
        };
        Url::parse(&base_url)
            .wrap_err_with(|| format!("API_BASE_URL is not a valid url: {base_url}"))?;

        let timezone = raw
            .mail
            .timezone
            .parse::<Tz>()
            .map_err(|e| eyre!("Invalid mail timezone {}: {e}", raw.mail.timezone))?;

        let transport = match raw.mail.transport {
            MailTransportKind::Smtp => MailTransport::Smtp(
                raw.mail
                    .smtp
                    .ok_or_else(|| eyre!("mail.transport is smtp but mail.smtp is missing"))?,
            ),
            MailTransportKind::File => MailTransport::File(PathBuf::from(
                raw.mail
                    .file_dir
                    .ok_or_else(|| eyre!("mail.transport is file but mail.file_dir is missing"))?,
            )),
        };

        Ok(Self {
            api: ApiSettings {
                host: raw.api.host,
                port: raw.api.port,
                base_url,
                allowed_origins: raw.api.allowed_origins,
            },
            database: raw.database,
            mail: MailSettings {
                transport,
                locale: raw.mail.locale,
                timezone,
                from_name: raw.mail.from_name,
                from_address: raw.mail.from_address,
            },
            logging: raw.logging,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RawApiSettings, RawMailSettings};

    fn raw_settings(base_url: Option<&str>) -> RawSettings {
        RawSettings {
            api: RawApiSettings {
                host: "127.0.0.1".to_string(),
                port: 3333,
                base_url: base_url.map(ToString::to_string),
                allowed_origins: vec![],
            },
            database: DatabaseSettings {
                url: "postgres://localhost/planner".to_string(),
                max_connections: 5,
                min_connections: 1,
                max_lifetime: 1800,
                idle_timeout: 600,
                acquire_timeout: 5,
            },
            mail: RawMailSettings {
                transport: MailTransportKind::File,
                locale: MailLocale::PtBr,
                timezone: "UTC".to_string(),
                from_name: "Equipe Planner".to_string(),
                from_address: "oi@plann.er".to_string(),
                smtp: None,
                file_dir: Some("mail".to_string()),
            },
            logging: LoggingSettings {
                level: "info".to_string(),
            },
        }
    }

    #[test]
    fn missing_base_url_is_a_startup_error() {
        let err = AppSettings::try_from(raw_settings(None)).unwrap_err();
        assert!(err.to_string().contains("API_BASE_URL"));

        assert!(AppSettings::try_from(raw_settings(Some("   "))).is_err());
    }

    #[test]
    fn base_url_must_be_a_url() {
        assert!(AppSettings::try_from(raw_settings(Some("not a url"))).is_err());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let settings = AppSettings::try_from(raw_settings(Some("http://localhost:3333/"))).unwrap();
        assert_eq!(settings.api.base_url, "http://localhost:3333");
    }

    #[test]
    fn smtp_transport_requires_smtp_section() {
        let mut raw = raw_settings(Some("http://localhost:3333"));
        raw.mail.transport = MailTransportKind::Smtp;
        assert!(AppSettings::try_from(raw).is_err());
    }

    #[test]
    fn timezone_is_parsed() {
        let mut raw = raw_settings(Some("http://localhost:3333"));
        raw.mail.timezone = "America/Sao_Paulo".to_string();
        let settings = AppSettings::try_from(raw).unwrap();
        assert_eq!(settings.mail.timezone, chrono_tz::America::Sao_Paulo);

        let mut raw = raw_settings(Some("http://localhost:3333"));
        raw.mail.timezone = "Mars/Olympus".to_string();
        assert!(AppSettings::try_from(raw).is_err());
    }
}
