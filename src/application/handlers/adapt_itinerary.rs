//! AdaptItineraryHandler - free-text adaptation suggestions for a trip.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, TripId};
use crate::ports::{
    ActivityRepository, AdaptationContext, GeneratorError, ItineraryGenerator, TripRepository,
};

/// Command to request adaptation suggestions.
#[derive(Debug, Clone)]
pub struct AdaptItineraryCommand {
    pub trip_id: TripId,
    pub context: AdaptationContext,
}

/// Error type for adaptation requests.
#[derive(Debug, thiserror::Error)]
pub enum AdaptItineraryError {
    #[error("Trip not found: {0}")]
    TripNotFound(TripId),
    #[error("Generation failed: {0}")]
    GenerationFailed(#[source] GeneratorError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Handler for itinerary adaptation suggestions.
pub struct AdaptItineraryHandler {
    trips: Arc<dyn TripRepository>,
    activities: Arc<dyn ActivityRepository>,
    generator: Arc<dyn ItineraryGenerator>,
}

impl AdaptItineraryHandler {
    pub fn new(
        trips: Arc<dyn TripRepository>,
        activities: Arc<dyn ActivityRepository>,
        generator: Arc<dyn ItineraryGenerator>,
    ) -> Self {
        Self {
            trips,
            activities,
            generator,
        }
    }

    pub async fn handle(&self, cmd: AdaptItineraryCommand) -> Result<String, AdaptItineraryError> {
        self.trips
            .find_by_id(cmd.trip_id)
            .await?
            .ok_or(AdaptItineraryError::TripNotFound(cmd.trip_id))?;

        let activities = self.activities.list_by_trip(cmd.trip_id).await?;
        let summary = activities
            .iter()
            .map(|a| format!("{} - {} at {}", a.time, a.title, a.location))
            .collect::<Vec<_>>()
            .join("\n");

        self.generator
            .adapt_itinerary(&summary, &cmd.context)
            .await
            .map_err(AdaptItineraryError::GenerationFailed)
    }
}
