use crate::database::DbError;
use app_state::DatabaseSettings;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::time::Duration;
use tracing::info;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../../migrations");

/// Open the Postgres connection pool.
/// # Errors
///
/// * `PgPoolOptions::connect` can return an error if the database connection fails.
pub async fn get_db_pool(db_settings: &DatabaseSettings) -> Result<Pool<Postgres>, DbError> {
    info!("Connecting to database.");
    let pool = PgPoolOptions::new()
        .max_connections(db_settings.max_connections)
        .min_connections(db_settings.min_connections)
        .max_lifetime(Duration::from_secs(db_settings.max_lifetime))
        .idle_timeout(Duration::from_secs(db_settings.idle_timeout))
        .acquire_timeout(Duration::from_secs(db_settings.acquire_timeout))
        .test_before_acquire(true)
        .connect(&db_settings.url)
        .await?;
    Ok(pool)
}

/// Apply pending migrations from the workspace `migrations` folder.
pub async fn run_migrations(pool: &Pool<Postgres>) -> Result<(), DbError> {
    info!("Running database migrations.");
    MIGRATOR.run(pool).await?;
    Ok(())
}
