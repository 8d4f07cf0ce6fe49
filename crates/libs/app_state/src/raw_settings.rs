use serde::Deserialize;

/// Settings as they come out of `config/settings.yaml` and the environment, before validation.
#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub api: RawApiSettings,
    pub database: DatabaseSettings,
    pub mail: RawMailSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawApiSettings {
    pub host: String,
    pub port: u16,
    /// Public base url of this API, used to build confirmation links. Filled from `API_BASE_URL`.
    pub base_url: Option<String>,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Database connection and pool configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime: u64,
    pub idle_timeout: u64,
    pub acquire_timeout: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawMailSettings {
    pub transport: MailTransportKind,
    pub locale: MailLocale,
    /// IANA timezone name used when rendering trip dates, e.g. "UTC" or "America/Sao_Paulo".
    pub timezone: String,
    pub from_name: String,
    pub from_address: String,
    pub smtp: Option<SmtpSettings>,
    pub file_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MailTransportKind {
    Smtp,
    File,
}

/// Language of outgoing mail, including the long date format.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum MailLocale {
    #[default]
    #[serde(rename = "pt-BR", alias = "pt-br")]
    PtBr,
    #[serde(rename = "en")]
    En,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub use_tls: bool,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}
