use crate::database::{DbError, NewParticipant, Participant, Trip};
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence used by the invite flow.
#[async_trait]
pub trait TripStore: Send + Sync {
    /// Look up a trip, `None` if it does not exist.
    async fn find_trip(&self, trip_id: Uuid) -> Result<Option<Trip>, DbError>;

    /// Insert a participant. Every call creates a new row, even for an email already on the trip.
    async fn create_participant(&self, participant: &NewParticipant)
    -> Result<Participant, DbError>;

    /// Cheap round trip to check the backend is reachable.
    async fn ping(&self) -> Result<(), DbError>;
}
