//! CareModeHandler - wellness micro-itinerary for one unwell traveler.

use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::ports::{CareModePlan, GeneratorError, ItineraryGenerator};

/// Command to request a care plan.
#[derive(Debug, Clone)]
pub struct CareModeCommand {
    pub condition: String,
    pub destination: String,
    pub current_activity: Option<String>,
}

/// Error type for care plan requests.
#[derive(Debug, thiserror::Error)]
pub enum CareModeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Generation failed: {0}")]
    GenerationFailed(#[source] GeneratorError),
}

/// Handler for Care Mode plans.
pub struct CareModeHandler {
    generator: Arc<dyn ItineraryGenerator>,
}

impl CareModeHandler {
    pub fn new(generator: Arc<dyn ItineraryGenerator>) -> Self {
        Self { generator }
    }

    pub async fn handle(&self, cmd: CareModeCommand) -> Result<CareModePlan, CareModeError> {
        if cmd.condition.trim().is_empty() {
            return Err(ValidationError::empty_field("condition").into());
        }
        if cmd.destination.trim().is_empty() {
            return Err(ValidationError::empty_field("destination").into());
        }

        self.generator
            .care_plan(
                &cmd.condition,
                &cmd.destination,
                cmd.current_activity.as_deref(),
            )
            .await
            .map_err(CareModeError::GenerationFailed)
    }
}
