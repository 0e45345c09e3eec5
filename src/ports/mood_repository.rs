//! Mood reading repository port (append-only).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, TripId};
use crate::domain::trip::MoodReading;

/// Repository port for the append-only mood reading log.
#[async_trait]
pub trait MoodReadingRepository: Send + Sync {
    /// Appends a reading. Readings are never mutated or deleted.
    async fn append(&self, reading: MoodReading) -> Result<MoodReading, DomainError>;

    /// Lists a trip's readings, most recent first.
    async fn list_by_trip(&self, trip_id: TripId) -> Result<Vec<MoodReading>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn MoodReadingRepository) {}
    }
}
