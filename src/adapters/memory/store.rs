//! In-memory store implementing every repository port.
//!
//! All tables live behind one `RwLock`, which makes the pivot commit
//! (activity swap + audit log append) a single writer-side critical
//! section. Append-only logs are kept as vectors in insertion order.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{
    ActivityId, BudgetItemId, DomainError, ErrorCode, PreferencesId, TravelerId, TripId,
};
use crate::domain::pivot::PivotSwap;
use crate::domain::trip::{
    Activity, ActivityPatch, BudgetItem, ChatMessage, Coordinates, MoodReading, NewActivity,
    NewBudgetItem, NewPivotLog, NewTrip, PivotLog, PreferencesPatch, TravelerPreferences, Trip,
    TripStatus,
};
use crate::ports::{
    ActivityRepository, BudgetItemRepository, ChatMessageRepository, MoodReadingRepository,
    PivotCommitter, PivotLogRepository, PreferencesRepository, TripRepository,
};

#[derive(Debug, Default)]
struct Tables {
    trips: HashMap<TripId, Trip>,
    activities: HashMap<ActivityId, Activity>,
    budget_items: HashMap<BudgetItemId, BudgetItem>,
    mood_readings: Vec<MoodReading>,
    pivot_logs: Vec<PivotLog>,
    chat_messages: Vec<ChatMessage>,
    preferences: HashMap<PreferencesId, TravelerPreferences>,
}

/// Memory-resident implementation of the store ports.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every table (useful for tests).
    pub async fn clear(&self) {
        *self.tables.write().await = Tables::default();
    }
}

fn trip_not_found() -> DomainError {
    DomainError::new(ErrorCode::TripNotFound, "Trip not found")
}

fn activity_not_found() -> DomainError {
    DomainError::new(ErrorCode::ActivityNotFound, "Activity not found")
}

fn budget_item_not_found() -> DomainError {
    DomainError::new(ErrorCode::BudgetItemNotFound, "Budget item not found")
}

#[async_trait]
impl TripRepository for InMemoryStore {
    async fn create(&self, new: NewTrip) -> Result<Trip, DomainError> {
        let trip = Trip::create(new)?;
        let mut tables = self.tables.write().await;
        tables.trips.insert(trip.id, trip.clone());
        Ok(trip)
    }

    async fn find_by_id(&self, id: TripId) -> Result<Option<Trip>, DomainError> {
        Ok(self.tables.read().await.trips.get(&id).cloned())
    }

    async fn list_by_traveler(&self, traveler_id: &TravelerId) -> Result<Vec<Trip>, DomainError> {
        let tables = self.tables.read().await;
        let mut trips: Vec<Trip> = tables
            .trips
            .values()
            .filter(|t| &t.traveler_id == traveler_id)
            .cloned()
            .collect();
        trips.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(trips)
    }

    async fn update(
        &self,
        id: TripId,
        destination: Option<String>,
        start_date: Option<String>,
        end_date: Option<String>,
        budget: Option<f64>,
        image_url: Option<String>,
    ) -> Result<Trip, DomainError> {
        let mut tables = self.tables.write().await;
        let trip = tables.trips.get_mut(&id).ok_or_else(trip_not_found)?;
        if let Some(destination) = destination {
            trip.destination = destination;
        }
        if let Some(start_date) = start_date {
            trip.start_date = start_date;
        }
        if let Some(end_date) = end_date {
            trip.end_date = end_date;
        }
        if let Some(budget) = budget {
            trip.budget = budget;
        }
        if let Some(image_url) = image_url {
            trip.image_url = Some(image_url);
        }
        Ok(trip.clone())
    }

    async fn set_spent(&self, id: TripId, spent: f64) -> Result<Trip, DomainError> {
        let mut tables = self.tables.write().await;
        let trip = tables.trips.get_mut(&id).ok_or_else(trip_not_found)?;
        trip.spent = spent;
        Ok(trip.clone())
    }

    async fn set_status(&self, id: TripId, status: TripStatus) -> Result<Trip, DomainError> {
        let mut tables = self.tables.write().await;
        let trip = tables.trips.get_mut(&id).ok_or_else(trip_not_found)?;
        trip.status = status;
        Ok(trip.clone())
    }

    async fn set_coordinates(
        &self,
        id: TripId,
        coordinates: Coordinates,
    ) -> Result<Trip, DomainError> {
        let mut tables = self.tables.write().await;
        let trip = tables.trips.get_mut(&id).ok_or_else(trip_not_found)?;
        trip.coordinates = Some(coordinates);
        Ok(trip.clone())
    }
}

#[async_trait]
impl ActivityRepository for InMemoryStore {
    async fn create(&self, new: NewActivity) -> Result<Activity, DomainError> {
        let activity = Activity::create(new)?;
        let mut tables = self.tables.write().await;
        tables.activities.insert(activity.id, activity.clone());
        Ok(activity)
    }

    async fn insert_batch(&self, activities: Vec<Activity>) -> Result<(), DomainError> {
        // Rows were validated at construction; one write lock makes the
        // batch all-or-nothing from any reader's point of view.
        let mut tables = self.tables.write().await;
        for activity in activities {
            tables.activities.insert(activity.id, activity);
        }
        Ok(())
    }

    async fn find_by_id(&self, id: ActivityId) -> Result<Option<Activity>, DomainError> {
        Ok(self.tables.read().await.activities.get(&id).cloned())
    }

    async fn list_by_trip(&self, trip_id: TripId) -> Result<Vec<Activity>, DomainError> {
        let tables = self.tables.read().await;
        let mut activities: Vec<Activity> = tables
            .activities
            .values()
            .filter(|a| a.trip_id == trip_id && !a.is_shadow_option)
            .cloned()
            .collect();
        activities.sort_by(|a, b| a.day.cmp(&b.day).then(a.order_index.cmp(&b.order_index)));
        Ok(activities)
    }

    async fn list_shadows(&self, trip_id: TripId) -> Result<Vec<Activity>, DomainError> {
        let tables = self.tables.read().await;
        let mut shadows: Vec<Activity> = tables
            .activities
            .values()
            .filter(|a| a.trip_id == trip_id && a.is_shadow_option)
            .cloned()
            .collect();
        shadows.sort_by(|a, b| a.day.cmp(&b.day).then(a.order_index.cmp(&b.order_index)));
        Ok(shadows)
    }

    async fn update(&self, id: ActivityId, patch: ActivityPatch) -> Result<Activity, DomainError> {
        let mut tables = self.tables.write().await;
        let activity = tables
            .activities
            .get_mut(&id)
            .ok_or_else(activity_not_found)?;
        activity.apply_patch(&patch);
        Ok(activity.clone())
    }

    async fn set_coordinates(
        &self,
        id: ActivityId,
        coordinates: Coordinates,
    ) -> Result<Activity, DomainError> {
        let mut tables = self.tables.write().await;
        let activity = tables
            .activities
            .get_mut(&id)
            .ok_or_else(activity_not_found)?;
        activity.coordinates = Some(coordinates);
        Ok(activity.clone())
    }

    async fn delete(&self, id: ActivityId) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        tables
            .activities
            .remove(&id)
            .map(|_| ())
            .ok_or_else(activity_not_found)
    }
}

#[async_trait]
impl BudgetItemRepository for InMemoryStore {
    async fn create(&self, new: NewBudgetItem) -> Result<BudgetItem, DomainError> {
        let item = BudgetItem::create(new)?;
        let mut tables = self.tables.write().await;
        tables.budget_items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: BudgetItemId) -> Result<Option<BudgetItem>, DomainError> {
        Ok(self.tables.read().await.budget_items.get(&id).cloned())
    }

    async fn list_by_trip(&self, trip_id: TripId) -> Result<Vec<BudgetItem>, DomainError> {
        let tables = self.tables.read().await;
        let mut items: Vec<BudgetItem> = tables
            .budget_items
            .values()
            .filter(|b| b.trip_id == trip_id)
            .cloned()
            .collect();
        // ISO dates compare lexicographically; creation time breaks ties.
        items.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(items)
    }

    async fn find_by_source_activity(
        &self,
        activity_id: ActivityId,
    ) -> Result<Option<BudgetItem>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .budget_items
            .values()
            .find(|b| b.source_activity_id == Some(activity_id))
            .cloned())
    }

    async fn update_mirrored(
        &self,
        id: BudgetItemId,
        amount: f64,
        description: String,
        category: String,
    ) -> Result<BudgetItem, DomainError> {
        let mut tables = self.tables.write().await;
        let item = tables
            .budget_items
            .get_mut(&id)
            .ok_or_else(budget_item_not_found)?;
        item.amount = amount;
        item.description = description;
        item.category = category;
        Ok(item.clone())
    }

    async fn delete(&self, id: BudgetItemId) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        tables
            .budget_items
            .remove(&id)
            .map(|_| ())
            .ok_or_else(budget_item_not_found)
    }
}

#[async_trait]
impl MoodReadingRepository for InMemoryStore {
    async fn append(&self, reading: MoodReading) -> Result<MoodReading, DomainError> {
        let mut tables = self.tables.write().await;
        tables.mood_readings.push(reading.clone());
        Ok(reading)
    }

    async fn list_by_trip(&self, trip_id: TripId) -> Result<Vec<MoodReading>, DomainError> {
        let tables = self.tables.read().await;
        // Insertion order reversed = most recent first.
        Ok(tables
            .mood_readings
            .iter()
            .rev()
            .filter(|r| r.trip_id == trip_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PivotLogRepository for InMemoryStore {
    async fn append(&self, new: NewPivotLog) -> Result<PivotLog, DomainError> {
        let log = PivotLog::append(new);
        let mut tables = self.tables.write().await;
        tables.pivot_logs.push(log.clone());
        Ok(log)
    }

    async fn list_by_trip(&self, trip_id: TripId) -> Result<Vec<PivotLog>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .pivot_logs
            .iter()
            .rev()
            .filter(|l| l.trip_id == trip_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ChatMessageRepository for InMemoryStore {
    async fn append(&self, message: ChatMessage) -> Result<ChatMessage, DomainError> {
        let mut tables = self.tables.write().await;
        tables.chat_messages.push(message.clone());
        Ok(message)
    }

    async fn list(&self) -> Result<Vec<ChatMessage>, DomainError> {
        Ok(self.tables.read().await.chat_messages.clone())
    }
}

#[async_trait]
impl PreferencesRepository for InMemoryStore {
    async fn create(
        &self,
        preferences: TravelerPreferences,
    ) -> Result<TravelerPreferences, DomainError> {
        let mut tables = self.tables.write().await;
        tables.preferences.insert(preferences.id, preferences.clone());
        Ok(preferences)
    }

    async fn find_by_traveler(
        &self,
        traveler_id: &TravelerId,
    ) -> Result<Option<TravelerPreferences>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .preferences
            .values()
            .find(|p| &p.traveler_id == traveler_id)
            .cloned())
    }

    async fn update(
        &self,
        id: PreferencesId,
        patch: PreferencesPatch,
    ) -> Result<TravelerPreferences, DomainError> {
        let mut tables = self.tables.write().await;
        let preferences = tables.preferences.get_mut(&id).ok_or_else(|| {
            DomainError::new(ErrorCode::PreferencesNotFound, "Preferences not found")
        })?;
        preferences.apply_patch(patch);
        Ok(preferences.clone())
    }
}

#[async_trait]
impl PivotCommitter for InMemoryStore {
    async fn commit_pivot(
        &self,
        trip_id: TripId,
        activity_id: ActivityId,
        swap: PivotSwap,
        log: NewPivotLog,
    ) -> Result<(Activity, PivotLog), DomainError> {
        // One write lock spans both mutations: no reader can see the swap
        // without the log entry or the log entry without the swap.
        let mut tables = self.tables.write().await;

        let activity = tables
            .activities
            .get_mut(&activity_id)
            .filter(|a| a.trip_id == trip_id)
            .ok_or_else(activity_not_found)?;
        swap.apply_to(activity);
        let activity = activity.clone();

        let log = PivotLog::append(log);
        tables.pivot_logs.push(log.clone());

        Ok((activity, log))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trip::{ActivityCategory, EnergyLevel, PivotTrigger};

    fn traveler() -> TravelerId {
        TravelerId::new("t-1").unwrap()
    }

    fn store() -> Arc<InMemoryStore> {
        Arc::new(InMemoryStore::new())
    }

    async fn seed_trip(store: &Arc<InMemoryStore>) -> Trip {
        let trips: Arc<dyn TripRepository> = store.clone();
        trips
            .create(NewTrip {
                traveler_id: traveler(),
                destination: "Reykjavik, Iceland".to_string(),
                start_date: "2026-02-01".to_string(),
                end_date: "2026-02-05".to_string(),
                budget: 2500.0,
                image_url: None,
                coordinates: None,
            })
            .await
            .unwrap()
    }

    fn new_activity(trip_id: TripId, day: u32, order_index: u32, title: &str) -> NewActivity {
        NewActivity {
            trip_id,
            day,
            title: title.to_string(),
            description: None,
            category: ActivityCategory::Activity,
            time: "09:00".to_string(),
            duration: None,
            location: "Downtown".to_string(),
            coordinates: None,
            image_url: None,
            image_keyword: None,
            cost: 0.0,
            order_index,
            energy_level_requirement: EnergyLevel::Medium,
            is_shadow_option: false,
            parent_activity_id: None,
        }
    }

    #[tokio::test]
    async fn activities_order_by_day_then_index() {
        let store = store();
        let trip = seed_trip(&store).await;
        let activities: Arc<dyn ActivityRepository> = store.clone();

        activities
            .create(new_activity(trip.id, 2, 0, "Day two"))
            .await
            .unwrap();
        activities
            .create(new_activity(trip.id, 1, 1, "Day one, later"))
            .await
            .unwrap();
        activities
            .create(new_activity(trip.id, 1, 0, "Day one, first"))
            .await
            .unwrap();

        let listed = activities.list_by_trip(trip.id).await.unwrap();
        let titles: Vec<&str> = listed.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Day one, first", "Day one, later", "Day two"]);
    }

    #[tokio::test]
    async fn main_listing_excludes_shadows_and_shadow_listing_is_exact() {
        let store = store();
        let trip = seed_trip(&store).await;
        let activities: Arc<dyn ActivityRepository> = store.clone();

        let main = activities
            .create(new_activity(trip.id, 1, 0, "Glacier Walk"))
            .await
            .unwrap();
        let mut shadow_new = new_activity(trip.id, 1, 0, "Lagoon Soak");
        shadow_new.is_shadow_option = true;
        shadow_new.parent_activity_id = Some(main.id);
        shadow_new.energy_level_requirement = EnergyLevel::Low;
        let shadow = activities.create(shadow_new).await.unwrap();

        let mains = activities.list_by_trip(trip.id).await.unwrap();
        assert_eq!(mains.len(), 1);
        assert_eq!(mains[0].id, main.id);

        let shadows = activities.list_shadows(trip.id).await.unwrap();
        assert_eq!(shadows.len(), 1);
        assert_eq!(shadows[0].id, shadow.id);
    }

    #[tokio::test]
    async fn budget_items_order_date_descending() {
        let store = store();
        let trip = seed_trip(&store).await;
        let items: Arc<dyn BudgetItemRepository> = store.clone();

        for (date, desc) in [
            ("2026-02-02", "middle"),
            ("2026-02-04", "latest"),
            ("2026-02-01", "earliest"),
        ] {
            items
                .create(NewBudgetItem {
                    trip_id: trip.id,
                    category: "food".to_string(),
                    amount: 10.0,
                    description: desc.to_string(),
                    date: date.to_string(),
                    source_activity_id: None,
                })
                .await
                .unwrap();
        }

        let listed = items.list_by_trip(trip.id).await.unwrap();
        let descs: Vec<&str> = listed.iter().map(|i| i.description.as_str()).collect();
        assert_eq!(descs, vec!["latest", "middle", "earliest"]);
    }

    #[tokio::test]
    async fn mood_and_pivot_logs_list_most_recent_first() {
        let store = store();
        let trip = seed_trip(&store).await;

        let readings: Arc<dyn MoodReadingRepository> = store.clone();
        readings
            .append(MoodReading::record(trip.id, traveler(), EnergyLevel::High))
            .await
            .unwrap();
        readings
            .append(MoodReading::record(trip.id, traveler(), EnergyLevel::Low))
            .await
            .unwrap();

        let listed = readings.list_by_trip(trip.id).await.unwrap();
        assert!(listed[0].energy_level.is_low());
        assert_eq!(listed.len(), 2);

        let logs: Arc<dyn PivotLogRepository> = store.clone();
        logs.append(NewPivotLog {
            trip_id: trip.id,
            previous_activity_id: None,
            new_activity_id: None,
            reason: Some("first".to_string()),
            trigger: PivotTrigger::UserConsensus,
        })
        .await
        .unwrap();
        logs.append(NewPivotLog {
            trip_id: trip.id,
            previous_activity_id: None,
            new_activity_id: None,
            reason: Some("second".to_string()),
            trigger: PivotTrigger::UserConsensus,
        })
        .await
        .unwrap();

        let listed = logs.list_by_trip(trip.id).await.unwrap();
        assert_eq!(listed[0].reason.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn trip_scoping_isolates_trips() {
        let store = store();
        let trip_a = seed_trip(&store).await;
        let trip_b = seed_trip(&store).await;
        let activities: Arc<dyn ActivityRepository> = store.clone();

        activities
            .create(new_activity(trip_a.id, 1, 0, "A only"))
            .await
            .unwrap();

        assert_eq!(activities.list_by_trip(trip_a.id).await.unwrap().len(), 1);
        assert!(activities.list_by_trip(trip_b.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn updates_on_missing_rows_fail_not_found() {
        let store = store();
        let trips: Arc<dyn TripRepository> = store.clone();
        let err = trips.set_spent(TripId::new(), 10.0).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::TripNotFound);

        let activities: Arc<dyn ActivityRepository> = store.clone();
        let err = activities
            .update(ActivityId::new(), ActivityPatch::completion(true))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ActivityNotFound);

        let items: Arc<dyn BudgetItemRepository> = store.clone();
        let err = items.delete(BudgetItemId::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BudgetItemNotFound);
    }

    #[tokio::test]
    async fn commit_pivot_swaps_and_logs_together() {
        let store = store();
        let trip = seed_trip(&store).await;
        let activities: Arc<dyn ActivityRepository> = store.clone();
        let main = activities
            .create(new_activity(trip.id, 1, 0, "Glacier Walk"))
            .await
            .unwrap();

        let committer: Arc<dyn PivotCommitter> = store.clone();
        let swap = PivotSwap {
            title: "Hot Spring Soak".to_string(),
            description: None,
            category: ActivityCategory::Activity,
            location: "Blue Lagoon".to_string(),
            cost: 60.0,
            duration: Some("2 hours".to_string()),
        };
        let (activity, log) = committer
            .commit_pivot(
                trip.id,
                main.id,
                swap,
                NewPivotLog {
                    trip_id: trip.id,
                    previous_activity_id: Some(main.id),
                    new_activity_id: Some(main.id),
                    reason: None,
                    trigger: PivotTrigger::UserConsensus,
                },
            )
            .await
            .unwrap();

        assert_eq!(activity.id, main.id);
        assert_eq!(activity.title, "Hot Spring Soak");
        assert_eq!(activity.energy_level_requirement, EnergyLevel::Low);
        assert_eq!(log.previous_activity_id, Some(main.id));

        let logs: Arc<dyn PivotLogRepository> = store.clone();
        assert_eq!(logs.list_by_trip(trip.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn commit_pivot_rejects_wrong_trip_and_writes_nothing() {
        let store = store();
        let trip = seed_trip(&store).await;
        let other = seed_trip(&store).await;
        let activities: Arc<dyn ActivityRepository> = store.clone();
        let main = activities
            .create(new_activity(trip.id, 1, 0, "Glacier Walk"))
            .await
            .unwrap();

        let committer: Arc<dyn PivotCommitter> = store.clone();
        let err = committer
            .commit_pivot(
                other.id,
                main.id,
                PivotSwap {
                    title: "X".to_string(),
                    description: None,
                    category: ActivityCategory::Activity,
                    location: "Y".to_string(),
                    cost: 0.0,
                    duration: None,
                },
                NewPivotLog {
                    trip_id: other.id,
                    previous_activity_id: Some(main.id),
                    new_activity_id: Some(main.id),
                    reason: None,
                    trigger: PivotTrigger::UserConsensus,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ActivityNotFound);

        let logs: Arc<dyn PivotLogRepository> = store.clone();
        assert!(logs.list_by_trip(other.id).await.unwrap().is_empty());
        let unchanged = activities.find_by_id(main.id).await.unwrap().unwrap();
        assert_eq!(unchanged.title, "Glacier Walk");
    }

    #[tokio::test]
    async fn preferences_roundtrip_and_missing_update_fails() {
        let store = store();
        let prefs_repo: Arc<dyn PreferencesRepository> = store.clone();

        let created = prefs_repo
            .create(TravelerPreferences::defaults_for(traveler()))
            .await
            .unwrap();
        let found = prefs_repo.find_by_traveler(&traveler()).await.unwrap();
        assert_eq!(found.map(|p| p.id), Some(created.id));

        let err = prefs_repo
            .update(PreferencesId::new(), PreferencesPatch::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PreferencesNotFound);
    }

    #[tokio::test]
    async fn clear_empties_every_table() {
        let store = store();
        seed_trip(&store).await;
        store.clear().await;
        let trips: Arc<dyn TripRepository> = store.clone();
        assert!(trips.list_by_traveler(&traveler()).await.unwrap().is_empty());
    }
}
