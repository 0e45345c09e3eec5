//! Mood reading entity - one energy signal in a trip's append-only log.

use crate::domain::foundation::{MoodReadingId, Timestamp, TravelerId, TripId};

use super::EnergyLevel;

/// A single submitted energy reading. Immutable after creation; the
/// reading log is append-only.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodReading {
    pub id: MoodReadingId,
    pub trip_id: TripId,
    pub traveler_id: TravelerId,
    pub energy_level: EnergyLevel,
    pub recorded_at: Timestamp,
}

impl MoodReading {
    /// Records a reading at the current moment.
    pub fn record(trip_id: TripId, traveler_id: TravelerId, energy_level: EnergyLevel) -> Self {
        Self {
            id: MoodReadingId::new(),
            trip_id,
            traveler_id,
            energy_level,
            recorded_at: Timestamp::now(),
        }
    }
}
