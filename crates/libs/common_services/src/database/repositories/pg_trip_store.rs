use crate::database::{DbError, NewParticipant, Participant, Trip, TripStore};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

#[derive(Clone)]
pub struct PgTripStore {
    pool: PgPool,
}

impl PgTripStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TripStore for PgTripStore {
    #[instrument(skip(self))]
    async fn find_trip(&self, trip_id: Uuid) -> Result<Option<Trip>, DbError> {
        Ok(sqlx::query_as::<_, Trip>(
            r"
            SELECT id, destination, starts_at, ends_at, is_confirmed, created_at
            FROM trip
            WHERE id = $1
            ",
        )
        .bind(trip_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    #[instrument(skip(self))]
    async fn create_participant(
        &self,
        participant: &NewParticipant,
    ) -> Result<Participant, DbError> {
        Ok(sqlx::query_as::<_, Participant>(
            r"
            INSERT INTO participant (email, trip_id)
            VALUES ($1, $2)
            RETURNING id, name, email, is_confirmed, is_owner, trip_id
            ",
        )
        .bind(&participant.email)
        .bind(participant.trip_id)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
