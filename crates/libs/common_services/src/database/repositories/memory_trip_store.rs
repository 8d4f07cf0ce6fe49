use crate::database::{DbError, NewParticipant, Participant, Trip, TripStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

/// In-process `TripStore` for tests. Counts lookups so tests can assert on store access.
#[derive(Default)]
pub struct MemoryTripStore {
    trips: Mutex<HashMap<Uuid, Trip>>,
    participants: Mutex<Vec<Participant>>,
    lookups: Mutex<usize>,
    failing_ping: bool,
}

impl MemoryTripStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose `ping` fails, as if the database were unreachable.
    #[must_use]
    pub fn with_failing_ping() -> Self {
        Self {
            failing_ping: true,
            ..Self::default()
        }
    }

    /// Seed a trip and return it.
    pub async fn add_trip(
        &self,
        destination: &str,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Trip {
        let trip = Trip {
            id: Uuid::new_v4(),
            destination: destination.to_string(),
            starts_at,
            ends_at,
            is_confirmed: false,
            created_at: Utc::now(),
        };
        self.trips.lock().await.insert(trip.id, trip.clone());
        trip
    }

    pub async fn participants(&self) -> Vec<Participant> {
        self.participants.lock().await.clone()
    }

    pub async fn lookups(&self) -> usize {
        *self.lookups.lock().await
    }
}

#[async_trait]
impl TripStore for MemoryTripStore {
    async fn find_trip(&self, trip_id: Uuid) -> Result<Option<Trip>, DbError> {
        *self.lookups.lock().await += 1;
        Ok(self.trips.lock().await.get(&trip_id).cloned())
    }

    async fn create_participant(
        &self,
        participant: &NewParticipant,
    ) -> Result<Participant, DbError> {
        let row = Participant {
            id: Uuid::new_v4(),
            name: None,
            email: participant.email.clone(),
            is_confirmed: false,
            is_owner: false,
            trip_id: participant.trip_id,
        };
        self.participants.lock().await.push(row.clone());
        Ok(row)
    }

    async fn ping(&self) -> Result<(), DbError> {
        if self.failing_ping {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}
