use crate::{AppSettings, RawSettings};
use color_eyre::eyre::Result;
use std::env;
use std::path::Path;
use tracing::debug;

/// Loads `config/settings.yaml`, `.env`, and environment overrides.
pub fn load_app_settings() -> Result<AppSettings> {
    load_settings_from_path(Path::new("config/settings.yaml"), true)
}

/// Environment overrides use the `APP__SECTION__KEY` form, e.g. `APP__API__PORT=8080`.
/// `API_BASE_URL` and `DATABASE_URL` are also read as-is.
pub fn load_settings_from_path(path: &Path, use_dotenv: bool) -> Result<AppSettings> {
    if use_dotenv {
        dotenv::from_path(".env").ok();
    }
    let config_path = path.canonicalize()?;
    debug!("Loading settings from {}", config_path.display());

    let builder = config::Config::builder()
        .add_source(config::File::from(config_path))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option("api.base_url", env::var("API_BASE_URL").ok())?
        .set_override_option("database.url", env::var("DATABASE_URL").ok())?;

    let raw_settings = builder.build()?.try_deserialize::<RawSettings>()?;
    AppSettings::try_from(raw_settings)
}
