//! ProposePivotHandler - resolves a replacement for a triggering activity.
//!
//! Resolution order: a stored shadow option whose parent is the triggering
//! activity wins and skips the generator entirely; otherwise the generator
//! synthesizes a fresh proposal. Either way nothing is persisted - the
//! pivot stays idle until confirmed.

use std::sync::Arc;

use crate::domain::foundation::{ActivityId, DomainError, TripId};
use crate::domain::pivot::PivotProposal;
use crate::ports::{
    ActivityRepository, GeneratorError, ItineraryGenerator, PivotContext, TripRepository,
};

/// Command to propose a pivot for one activity.
#[derive(Debug, Clone)]
pub struct ProposePivotCommand {
    pub trip_id: TripId,
    pub current_activity_id: ActivityId,
    pub context: PivotContext,
}

/// Error type for pivot proposals.
#[derive(Debug, thiserror::Error)]
pub enum ProposePivotError {
    #[error("Trip not found: {0}")]
    TripNotFound(TripId),
    #[error("Activity not found: {0}")]
    ActivityNotFound(ActivityId),
    #[error("Generation failed: {0}")]
    GenerationFailed(#[source] GeneratorError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Handler resolving pivot proposals.
pub struct ProposePivotHandler {
    trips: Arc<dyn TripRepository>,
    activities: Arc<dyn ActivityRepository>,
    generator: Arc<dyn ItineraryGenerator>,
}

impl ProposePivotHandler {
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

    pub async fn handle(&self, cmd: ProposePivotCommand) -> Result<PivotProposal, ProposePivotError> {
        self.trips
            .find_by_id(cmd.trip_id)
            .await?
            .ok_or(ProposePivotError::TripNotFound(cmd.trip_id))?;

        let activity = self
            .activities
            .find_by_id(cmd.current_activity_id)
            .await?
            .filter(|a| a.trip_id == cmd.trip_id)
            .ok_or(ProposePivotError::ActivityNotFound(cmd.current_activity_id))?;

        let shadows = self.activities.list_shadows(cmd.trip_id).await?;
        if let Some(shadow) = shadows.iter().find(|s| s.shadows(activity.id)) {
            tracing::debug!(
                activity_id = %activity.id,
                shadow_id = %shadow.id,
                "pivot resolved from pre-planned shadow option"
            );
            return Ok(PivotProposal::pre_planned(&activity.title, shadow));
        }

        let payload = self
            .generator
            .pivot_proposal(&activity, &cmd.context)
            .await
            .map_err(ProposePivotError::GenerationFailed)?;

        Ok(PivotProposal::generated(payload.proposal, payload.new_activity))
    }
}
