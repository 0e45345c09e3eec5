//! ConfirmPivotHandler - commits a proposed swap.
//!
//! The old activity record becomes the new plan: its user-visible fields
//! take the replacement values, its energy requirement drops to low, and
//! one audit log row is appended. Swap and log land atomically through the
//! committer port. Confirming twice with the same data re-applies the same
//! field values but always appends another log row.

use std::sync::Arc;

use crate::domain::foundation::{ActivityId, DomainError, ErrorCode, TripId};
use crate::domain::pivot::{PivotSwap, ProposedActivity};
use crate::domain::trip::{Activity, NewPivotLog, PivotLog, PivotTrigger};
use crate::application::BudgetLedger;
use crate::ports::PivotCommitter;

/// Command to confirm a pivot.
#[derive(Debug, Clone)]
pub struct ConfirmPivotCommand {
    pub trip_id: TripId,
    pub old_activity_id: ActivityId,
    pub new_activity: ProposedActivity,
    pub reason: Option<String>,
    pub trigger: Option<PivotTrigger>,
}

/// Result of a committed pivot.
#[derive(Debug, Clone)]
pub struct ConfirmPivotResult {
    pub activity: Activity,
    pub log: PivotLog,
}

/// Error type for pivot confirmation.
#[derive(Debug, thiserror::Error)]
pub enum ConfirmPivotError {
    #[error("Activity not found: {0}")]
    ActivityNotFound(ActivityId),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Handler committing confirmed pivots.
pub struct ConfirmPivotHandler {
    committer: Arc<dyn PivotCommitter>,
    ledger: Arc<BudgetLedger>,
}

impl ConfirmPivotHandler {
    pub fn new(committer: Arc<dyn PivotCommitter>, ledger: Arc<BudgetLedger>) -> Self {
        Self { committer, ledger }
    }

    pub async fn handle(&self, cmd: ConfirmPivotCommand) -> Result<ConfirmPivotResult, ConfirmPivotError> {
        let swap = PivotSwap::from_proposed(&cmd.new_activity);
        let log = NewPivotLog {
            trip_id: cmd.trip_id,
            previous_activity_id: Some(cmd.old_activity_id),
            // The record keeps its identity, so it is also the new plan.
            new_activity_id: Some(cmd.old_activity_id),
            reason: cmd.reason,
            trigger: cmd.trigger.unwrap_or(PivotTrigger::UserConsensus),
        };

        let (activity, log) = self
            .committer
            .commit_pivot(cmd.trip_id, cmd.old_activity_id, swap, log)
            .await
            .map_err(|err| {
                if err.code == ErrorCode::ActivityNotFound {
                    ConfirmPivotError::ActivityNotFound(cmd.old_activity_id)
                } else {
                    ConfirmPivotError::Domain(err)
                }
            })?;

        // A swap can rewrite the cost of an already-completed activity;
        // the mirrored ledger item follows it.
        self.ledger.refresh_mirrored_item(&activity).await?;

        tracing::info!(
            trip_id = %cmd.trip_id,
            activity_id = %activity.id,
            "pivot committed"
        );

        Ok(ConfirmPivotResult { activity, log })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::TripLocks;
    use crate::domain::foundation::TravelerId;
    use crate::domain::trip::{
        ActivityCategory, ActivityPatch, EnergyLevel, NewActivity, NewTrip, Trip,
    };
    use crate::ports::{
        ActivityRepository, BudgetItemRepository, PivotLogRepository, TripRepository,
    };

    fn handler(store: &Arc<InMemoryStore>) -> ConfirmPivotHandler {
        let ledger = Arc::new(BudgetLedger::new(
            store.clone(),
            store.clone(),
            store.clone(),
            Arc::new(TripLocks::new()),
        ));
        ConfirmPivotHandler::new(store.clone(), ledger)
    }

    async fn seed_trip(store: &Arc<InMemoryStore>) -> Trip {
        let trips: Arc<dyn TripRepository> = store.clone();
        trips
            .create(NewTrip {
                traveler_id: TravelerId::new("t-1").unwrap(),
                destination: "Banff, Canada".to_string(),
                start_date: "2026-06-01".to_string(),
                end_date: "2026-06-07".to_string(),
                budget: 3000.0,
                image_url: None,
                coordinates: None,
            })
            .await
            .unwrap()
    }

    async fn seed_main(store: &Arc<InMemoryStore>, trip_id: TripId, cost: f64) -> Activity {
        let activities: Arc<dyn ActivityRepository> = store.clone();
        activities
            .create(NewActivity {
                trip_id,
                day: 2,
                title: "Glacier Trek".to_string(),
                description: Some("Strenuous ice walk".to_string()),
                category: ActivityCategory::Activity,
                time: "08:00".to_string(),
                duration: Some("7 hours".to_string()),
                location: "Athabasca".to_string(),
                coordinates: None,
                image_url: None,
                image_keyword: None,
                cost,
                order_index: 0,
                energy_level_requirement: EnergyLevel::High,
                is_shadow_option: false,
                parent_activity_id: None,
            })
            .await
            .unwrap()
    }

    fn replacement() -> ProposedActivity {
        ProposedActivity {
            title: "Hot Springs Soak".to_string(),
            description: Some("Warm water, mountain views".to_string()),
            category: ActivityCategory::Activity,
            location: "Banff Upper Hot Springs".to_string(),
            cost: 20.0,
            duration: Some("2 hours".to_string()),
            coordinates: None,
        }
    }

    fn cmd(trip_id: TripId, old_activity_id: ActivityId) -> ConfirmPivotCommand {
        ConfirmPivotCommand {
            trip_id,
            old_activity_id,
            new_activity: replacement(),
            reason: Some("Group energy low".to_string()),
            trigger: None,
        }
    }

    #[tokio::test]
    async fn commit_rewrites_fields_and_appends_one_log() {
        let store = Arc::new(InMemoryStore::new());
        let trip = seed_trip(&store).await;
        let main = seed_main(&store, trip.id, 150.0).await;
        let handler = handler(&store);

        let result = handler.handle(cmd(trip.id, main.id)).await.unwrap();

        assert_eq!(result.activity.id, main.id);
        assert_eq!(result.activity.title, "Hot Springs Soak");
        assert_eq!(result.activity.cost, 20.0);
        assert_eq!(result.activity.energy_level_requirement, EnergyLevel::Low);
        assert!(!result.activity.is_shadow_option);

        assert_eq!(result.log.previous_activity_id, Some(main.id));
        assert_eq!(result.log.trigger, PivotTrigger::UserConsensus);

        let logs: Arc<dyn PivotLogRepository> = store.clone();
        assert_eq!(logs.list_by_trip(trip.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn double_confirm_is_idempotent_on_fields_but_logs_twice() {
        let store = Arc::new(InMemoryStore::new());
        let trip = seed_trip(&store).await;
        let main = seed_main(&store, trip.id, 150.0).await;
        let handler = handler(&store);

        let first = handler.handle(cmd(trip.id, main.id)).await.unwrap();
        let second = handler.handle(cmd(trip.id, main.id)).await.unwrap();

        assert_eq!(first.activity.title, second.activity.title);
        assert_eq!(first.activity.cost, second.activity.cost);

        let logs: Arc<dyn PivotLogRepository> = store.clone();
        assert_eq!(logs.list_by_trip(trip.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn missing_activity_fails_with_not_found_and_writes_nothing() {
        let store = Arc::new(InMemoryStore::new());
        let trip = seed_trip(&store).await;
        let handler = handler(&store);

        let result = handler.handle(cmd(trip.id, ActivityId::new())).await;
        assert!(matches!(result, Err(ConfirmPivotError::ActivityNotFound(_))));

        let logs: Arc<dyn PivotLogRepository> = store.clone();
        assert!(logs.list_by_trip(trip.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn pivot_on_completed_activity_refreshes_the_ledger() {
        let store = Arc::new(InMemoryStore::new());
        let trip = seed_trip(&store).await;
        let main = seed_main(&store, trip.id, 150.0).await;

        // Complete it first so the ledger mirrors the 150 cost.
        let ledger = Arc::new(BudgetLedger::new(
            store.clone(),
            store.clone(),
            store.clone(),
            Arc::new(TripLocks::new()),
        ));
        ledger
            .apply_activity_patch(&main, ActivityPatch::completion(true))
            .await
            .unwrap();

        let handler = ConfirmPivotHandler::new(store.clone(), ledger);
        handler.handle(cmd(trip.id, main.id)).await.unwrap();

        let trips: Arc<dyn TripRepository> = store.clone();
        let trip = trips.find_by_id(trip.id).await.unwrap().unwrap();
        assert_eq!(trip.spent, 20.0);

        let items: Arc<dyn BudgetItemRepository> = store.clone();
        let items = items.list_by_trip(trip.id).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Hot Springs Soak");
    }
}
