//! RecordMoodHandler - appends an energy reading and decides whether the
//! group state has crossed the pivot threshold.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, TravelerId, TripId};
use crate::domain::pivot::PivotPolicy;
use crate::domain::trip::{EnergyLevel, MoodReading};
use crate::ports::{MoodReadingRepository, TripRepository};

/// Command to record a mood reading for a trip.
#[derive(Debug, Clone)]
pub struct RecordMoodCommand {
    pub trip_id: TripId,
    pub traveler_id: TravelerId,
    pub energy_level: EnergyLevel,
}

/// Result: the stored reading and the pivot decision.
#[derive(Debug, Clone)]
pub struct RecordMoodResult {
    pub reading: MoodReading,
    pub should_pivot: bool,
}

/// Error type for mood recording.
#[derive(Debug, thiserror::Error)]
pub enum RecordMoodError {
    #[error("Trip not found: {0}")]
    TripNotFound(TripId),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Handler for recording mood readings.
pub struct RecordMoodHandler {
    trips: Arc<dyn TripRepository>,
    readings: Arc<dyn MoodReadingRepository>,
    policy: PivotPolicy,
}

impl RecordMoodHandler {
    pub fn new(
        trips: Arc<dyn TripRepository>,
        readings: Arc<dyn MoodReadingRepository>,
        policy: PivotPolicy,
    ) -> Self {
        Self {
            trips,
            readings,
            policy,
        }
    }

    pub async fn handle(&self, cmd: RecordMoodCommand) -> Result<RecordMoodResult, RecordMoodError> {
        self.trips
            .find_by_id(cmd.trip_id)
            .await?
            .ok_or(RecordMoodError::TripNotFound(cmd.trip_id))?;

        let reading = self
            .readings
            .append(MoodReading::record(
                cmd.trip_id,
                cmd.traveler_id,
                cmd.energy_level,
            ))
            .await?;

        let history = self.readings.list_by_trip(cmd.trip_id).await?;
        let should_pivot = self.policy.should_pivot(&reading, &history);

        if should_pivot {
            tracing::info!(trip_id = %cmd.trip_id, "group energy crossed pivot threshold");
        }

        Ok(RecordMoodResult {
            reading,
            should_pivot,
        })
    }
}
