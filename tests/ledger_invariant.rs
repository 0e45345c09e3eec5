//! Property test: after any sequence of budget item creates/deletes and
//! activity completion toggles, `trip.spent` equals the sum of the trip's
//! budget item amounts (clamped at zero, within floating tolerance).

use std::sync::Arc;

use proptest::prelude::*;

use vivot::adapters::memory::InMemoryStore;
use vivot::application::{BudgetLedger, TripLocks};
use vivot::domain::foundation::TravelerId;
use vivot::domain::trip::{
    ActivityCategory, ActivityPatch, EnergyLevel, NewActivity, NewBudgetItem, NewTrip,
};
use vivot::ports::{ActivityRepository, BudgetItemRepository, TripRepository};

#[derive(Debug, Clone)]
enum Op {
    /// Create a direct budget item with this amount.
    CreateItem(f64),
    /// Delete the n-th directly created item still alive (if any).
    DeleteItem(usize),
    /// Set completion of the n-th activity to this value.
    Toggle(usize, bool),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0.0f64..500.0).prop_map(Op::CreateItem),
        (0usize..8).prop_map(Op::DeleteItem),
        ((0usize..4), any::<bool>()).prop_map(|(i, c)| Op::Toggle(i, c)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn spent_always_equals_item_sum(ops in proptest::collection::vec(op_strategy(), 1..40)) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        rt.block_on(async move {
            let store = Arc::new(InMemoryStore::new());
            let trips: Arc<dyn TripRepository> = store.clone();
            let activities_repo: Arc<dyn ActivityRepository> = store.clone();
            let items_repo: Arc<dyn BudgetItemRepository> = store.clone();
            let ledger = BudgetLedger::new(
                store.clone(),
                store.clone(),
                store.clone(),
                Arc::new(TripLocks::new()),
            );

            let trip = trips
                .create(NewTrip {
                    traveler_id: TravelerId::new("t-prop").unwrap(),
                    destination: "Anywhere".to_string(),
                    start_date: "2026-01-01".to_string(),
                    end_date: "2026-01-05".to_string(),
                    budget: 10_000.0,
                    image_url: None,
                    coordinates: None,
                })
                .await
                .unwrap();

            // Fixed pool of activities with varied costs (one of them free).
            let costs = [50.0, 125.5, 0.0, 300.0];
            let mut pool = Vec::new();
            for (i, cost) in costs.iter().enumerate() {
                let activity = activities_repo
                    .create(NewActivity {
                        trip_id: trip.id,
                        day: 1,
                        title: format!("Activity {}", i),
                        description: None,
                        category: ActivityCategory::Activity,
                        time: "09:00".to_string(),
                        duration: None,
                        location: "Town".to_string(),
                        coordinates: None,
                        image_url: None,
                        image_keyword: None,
                        cost: *cost,
                        order_index: i as u32,
                        energy_level_requirement: EnergyLevel::Medium,
                        is_shadow_option: false,
                        parent_activity_id: None,
                    })
                    .await
                    .unwrap();
                pool.push(activity);
            }

            let mut direct_items = Vec::new();
            for op in ops {
                match op {
                    Op::CreateItem(amount) => {
                        let (item, _) = ledger
                            .add_item(NewBudgetItem {
                                trip_id: trip.id,
                                category: "misc".to_string(),
                                amount,
                                description: "direct entry".to_string(),
                                date: "2026-01-02".to_string(),
                                source_activity_id: None,
                            })
                            .await
                            .unwrap();
                        direct_items.push(item.id);
                    }
                    Op::DeleteItem(index) => {
                        if !direct_items.is_empty() {
                            let id = direct_items.remove(index % direct_items.len());
                            ledger.remove_item(id).await.unwrap();
                        }
                    }
                    Op::Toggle(index, completed) => {
                        let current = activities_repo
                            .find_by_id(pool[index % pool.len()].id)
                            .await
                            .unwrap()
                            .unwrap();
                        ledger
                            .apply_activity_patch(&current, ActivityPatch::completion(completed))
                            .await
                            .unwrap();
                    }
                }

                // Invariant holds at quiescence after every operation.
                let trip_now = trips.find_by_id(trip.id).await.unwrap().unwrap();
                let items = items_repo.list_by_trip(trip.id).await.unwrap();
                let total: f64 = items.iter().map(|i| i.amount).sum();
                prop_assert!(
                    (trip_now.spent - total.max(0.0)).abs() < 1e-6,
                    "spent {} diverged from item sum {}",
                    trip_now.spent,
                    total
                );

                // No activity ever has more than one mirrored item.
                for activity in &pool {
                    let mirrored = items
                        .iter()
                        .filter(|i| i.source_activity_id == Some(activity.id))
                        .count();
                    prop_assert!(mirrored <= 1, "duplicate mirror for {}", activity.id);
                }
            }

            Ok(())
        })?;
    }
}
