//! UpdateActivityHandler - patches an activity, routing completion flips
//! through the budget ledger.

use std::sync::Arc;

use crate::application::BudgetLedger;
use crate::domain::foundation::{ActivityId, DomainError};
use crate::domain::trip::{Activity, ActivityPatch, Trip};
use crate::ports::ActivityRepository;

/// Command to patch an activity. The patch is already narrowed to the
/// allow-listed fields.
#[derive(Debug, Clone)]
pub struct UpdateActivityCommand {
    pub activity_id: ActivityId,
    pub patch: ActivityPatch,
}

/// Result of an activity patch.
#[derive(Debug, Clone)]
pub struct UpdateActivityResult {
    pub activity: Activity,
    /// Present when the patch flipped completion and spend was recomputed.
    pub trip: Option<Trip>,
}

/// Error type for activity updates.
#[derive(Debug, thiserror::Error)]
pub enum UpdateActivityError {
    #[error("Activity not found: {0}")]
    ActivityNotFound(ActivityId),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Handler for activity patches and completion toggles.
pub struct UpdateActivityHandler {
    activities: Arc<dyn ActivityRepository>,
    ledger: Arc<BudgetLedger>,
}

impl UpdateActivityHandler {
    pub fn new(activities: Arc<dyn ActivityRepository>, ledger: Arc<BudgetLedger>) -> Self {
        Self { activities, ledger }
    }

    pub async fn handle(
        &self,
        cmd: UpdateActivityCommand,
    ) -> Result<UpdateActivityResult, UpdateActivityError> {
        let activity = self
            .activities
            .find_by_id(cmd.activity_id)
            .await?
            .ok_or(UpdateActivityError::ActivityNotFound(cmd.activity_id))?;

        let (activity, trip) = self.ledger.apply_activity_patch(&activity, cmd.patch).await?;
        Ok(UpdateActivityResult { activity, trip })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::TripLocks;
    use crate::domain::foundation::{TravelerId, TripId};
    use crate::domain::trip::{ActivityCategory, EnergyLevel, NewActivity, NewTrip};
    use crate::ports::TripRepository;

    fn handler(store: &Arc<InMemoryStore>) -> UpdateActivityHandler {
        let ledger = Arc::new(BudgetLedger::new(
            store.clone(),
            store.clone(),
            store.clone(),
            Arc::new(TripLocks::new()),
        ));
        UpdateActivityHandler::new(store.clone(), ledger)
    }

    async fn seed(store: &Arc<InMemoryStore>, cost: f64) -> (TripId, Activity) {
        let trips: Arc<dyn TripRepository> = store.clone();
        let trip = trips
            .create(NewTrip {
                traveler_id: TravelerId::new("t-1").unwrap(),
                destination: "Porto, Portugal".to_string(),
                start_date: "2026-05-01".to_string(),
                end_date: "2026-05-04".to_string(),
                budget: 1000.0,
                image_url: None,
                coordinates: None,
            })
            .await
            .unwrap();

        let activities: Arc<dyn ActivityRepository> = store.clone();
        let activity = activities
            .create(NewActivity {
                trip_id: trip.id,
                day: 1,
                title: "River Cruise".to_string(),
                description: None,
                category: ActivityCategory::Activity,
                time: "15:00".to_string(),
                duration: None,
                location: "Douro".to_string(),
                coordinates: None,
                image_url: None,
                image_keyword: None,
                cost,
                order_index: 0,
                energy_level_requirement: EnergyLevel::Medium,
                is_shadow_option: false,
                parent_activity_id: None,
            })
            .await
            .unwrap();
        (trip.id, activity)
    }

    #[tokio::test]
    async fn completion_toggle_side_effects_trip_spent() {
        let store = Arc::new(InMemoryStore::new());
        let (_, activity) = seed(&store, 100.0).await;
        let handler = handler(&store);

        let result = handler
            .handle(UpdateActivityCommand {
                activity_id: activity.id,
                patch: ActivityPatch::completion(true),
            })
            .await
            .unwrap();

        assert!(result.activity.completed);
        assert_eq!(result.trip.unwrap().spent, 100.0);
    }

    #[tokio::test]
    async fn toggle_on_then_off_is_net_zero() {
        let store = Arc::new(InMemoryStore::new());
        let (_, activity) = seed(&store, 50.0).await;
        let handler = handler(&store);

        handler
            .handle(UpdateActivityCommand {
                activity_id: activity.id,
                patch: ActivityPatch::completion(true),
            })
            .await
            .unwrap();
        let result = handler
            .handle(UpdateActivityCommand {
                activity_id: activity.id,
                patch: ActivityPatch::completion(false),
            })
            .await
            .unwrap();

        assert_eq!(result.trip.unwrap().spent, 0.0);
    }

    #[tokio::test]
    async fn plain_patch_skips_the_ledger() {
        let store = Arc::new(InMemoryStore::new());
        let (_, activity) = seed(&store, 100.0).await;
        let handler = handler(&store);

        let result = handler
            .handle(UpdateActivityCommand {
                activity_id: activity.id,
                patch: ActivityPatch {
                    title: Some("Evening River Cruise".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(result.activity.title, "Evening River Cruise");
        assert!(result.trip.is_none());
    }

    #[tokio::test]
    async fn unknown_activity_is_rejected() {
        let store = Arc::new(InMemoryStore::new());
        let handler = handler(&store);

        let result = handler
            .handle(UpdateActivityCommand {
                activity_id: ActivityId::new(),
                patch: ActivityPatch::completion(true),
            })
            .await;
        assert!(matches!(result, Err(UpdateActivityError::ActivityNotFound(_))));
    }
}
