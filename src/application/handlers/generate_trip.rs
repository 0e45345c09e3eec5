//! GenerateTripHandler - turns a chat message into a persisted trip.
//!
//! One generator call per request. When the reply carries a trip payload,
//! every activity row (mains plus attached shadows) is built in memory
//! first and committed with a single all-or-nothing batch insert, so a
//! trip never persists with a truncated itinerary. Unresolved coordinates
//! are backfilled afterwards, best-effort.

use std::sync::Arc;

use futures::future::join_all;

use crate::domain::foundation::{DomainError, TravelerId};
use crate::domain::trip::{
    Activity, ChatMessage, Coordinates, EnergyLevel, NewActivity, NewTrip, Trip,
};
use crate::ports::{
    ActivityRepository, ChatMessageRepository, GeneratedActivity, GeneratedTrip, Geocoder,
    GeneratorError, ItineraryGenerator, PreferencesRepository, TripRepository,
};

/// Command to process a travel-planning chat message.
#[derive(Debug, Clone)]
pub struct GenerateTripCommand {
    pub traveler_id: TravelerId,
    pub content: String,
}

/// Result: the assistant's reply and the trip it created, if any.
#[derive(Debug, Clone)]
pub struct GenerateTripResult {
    pub message: ChatMessage,
    pub trip: Option<Trip>,
}

/// Error type for trip generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerateTripError {
    #[error("message content cannot be empty")]
    EmptyContent,
    #[error("Generation failed: {0}")]
    GenerationFailed(#[source] GeneratorError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Handler for chat-driven trip generation.
pub struct GenerateTripHandler {
    trips: Arc<dyn TripRepository>,
    activities: Arc<dyn ActivityRepository>,
    preferences: Arc<dyn PreferencesRepository>,
    chat: Arc<dyn ChatMessageRepository>,
    generator: Arc<dyn ItineraryGenerator>,
    geocoder: Arc<dyn Geocoder>,
}

impl GenerateTripHandler {
    pub fn new(
        trips: Arc<dyn TripRepository>,
        activities: Arc<dyn ActivityRepository>,
        preferences: Arc<dyn PreferencesRepository>,
        chat: Arc<dyn ChatMessageRepository>,
        generator: Arc<dyn ItineraryGenerator>,
        geocoder: Arc<dyn Geocoder>,
    ) -> Self {
        Self {
            trips,
            activities,
            preferences,
            chat,
            generator,
            geocoder,
        }
    }

    pub async fn handle(&self, cmd: GenerateTripCommand) -> Result<GenerateTripResult, GenerateTripError> {
        if cmd.content.trim().is_empty() {
            return Err(GenerateTripError::EmptyContent);
        }

        self.chat.append(ChatMessage::user(&cmd.content)).await?;

        let preferences = self.preferences.find_by_traveler(&cmd.traveler_id).await?;

        let generated = self
            .generator
            .generate_itinerary(&cmd.content, preferences.as_ref())
            .await
            .map_err(GenerateTripError::GenerationFailed)?;

        let trip = match generated.trip {
            Some(payload) => Some(self.materialize_trip(&cmd.traveler_id, payload).await?),
            None => None,
        };

        let message = self
            .chat
            .append(ChatMessage::assistant(
                generated.response,
                trip.as_ref().map(|t| t.id),
            ))
            .await?;

        Ok(GenerateTripResult { message, trip })
    }

    /// Persists the trip row, batch-inserts all activity rows, then
    /// backfills coordinates.
    async fn materialize_trip(
        &self,
        traveler_id: &TravelerId,
        payload: GeneratedTrip,
    ) -> Result<Trip, GenerateTripError> {
        let trip = self
            .trips
            .create(NewTrip {
                traveler_id: traveler_id.clone(),
                destination: payload.destination,
                start_date: payload.start_date,
                end_date: payload.end_date,
                budget: payload.budget,
                image_url: None,
                coordinates: payload.coordinates,
            })
            .await?;

        let rows = build_activity_rows(&trip, &payload.activities);
        tracing::info!(
            trip_id = %trip.id,
            activities = rows.len(),
            "materializing generated itinerary"
        );
        self.activities.insert_batch(rows.clone()).await?;

        let trip = self.backfill_coordinates(trip, &rows).await?;
        Ok(trip)
    }

    /// Best-effort geocoder pass over the trip and its activities.
    /// Lookup failures leave coordinates unset.
    async fn backfill_coordinates(
        &self,
        trip: Trip,
        rows: &[Activity],
    ) -> Result<Trip, GenerateTripError> {
        let lookups = rows
            .iter()
            .filter(|a| a.needs_geocoding())
            .map(|a| async {
                let resolved = self.geocoder.resolve(&a.location).await;
                (a.id, resolved)
            });
        let resolved: Vec<(crate::domain::foundation::ActivityId, Option<Coordinates>)> =
            join_all(lookups).await;

        for (activity_id, coordinates) in resolved {
            if let Some(coordinates) = coordinates {
                self.activities
                    .set_coordinates(activity_id, coordinates)
                    .await?;
            }
        }

        if trip.needs_geocoding() {
            if let Some(coordinates) = self.geocoder.resolve(&trip.destination).await {
                return Ok(self.trips.set_coordinates(trip.id, coordinates).await?);
            }
        }
        Ok(trip)
    }
}

/// Builds every activity row for a generated itinerary: one main row per
/// payload activity plus a linked shadow row when one is attached. A row
/// that fails entity validation is dropped with a warning; the rest of the
/// itinerary survives.
fn build_activity_rows(trip: &Trip, generated: &[GeneratedActivity]) -> Vec<Activity> {
    let mut rows = Vec::with_capacity(generated.len() * 2);

    for item in generated {
        let main = match Activity::create(NewActivity {
            trip_id: trip.id,
            day: item.day,
            title: item.title.clone(),
            description: item.description.clone(),
            category: item.category,
            time: item.time.clone(),
            duration: item.duration.clone(),
            location: item.location.clone(),
            coordinates: item.coordinates,
            image_url: None,
            image_keyword: item.image_keyword.clone(),
            cost: item.cost,
            order_index: item.order_index,
            energy_level_requirement: EnergyLevel::High,
            is_shadow_option: false,
            parent_activity_id: None,
        }) {
            Ok(main) => main,
            Err(err) => {
                tracing::warn!(title = %item.title, %err, "dropping invalid generated activity");
                continue;
            }
        };

        if let Some(shadow) = &item.shadow_option {
            match Activity::create(NewActivity {
                trip_id: trip.id,
                day: item.day,
                title: shadow.title.clone(),
                description: shadow.description.clone(),
                category: shadow.category,
                time: shadow.time.clone(),
                duration: shadow.duration.clone(),
                location: shadow.location.clone(),
                coordinates: shadow.coordinates,
                image_url: None,
                image_keyword: None,
                cost: shadow.cost,
                order_index: item.order_index,
                energy_level_requirement: EnergyLevel::Low,
                is_shadow_option: true,
                parent_activity_id: Some(main.id),
            }) {
                Ok(shadow_row) => {
                    rows.push(main);
                    rows.push(shadow_row);
                    continue;
                }
                Err(err) => {
                    tracing::warn!(title = %shadow.title, %err, "dropping invalid shadow option");
                }
            }
        }
        rows.push(main);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockGenerator;
    use crate::adapters::geocode::NullGeocoder;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::trip::ActivityCategory;
    use crate::ports::{GeneratedItinerary, GeneratedShadow};

    fn traveler() -> TravelerId {
        TravelerId::new("t-1").unwrap()
    }

    fn handler_with(
        store: &Arc<InMemoryStore>,
        generator: Arc<MockGenerator>,
        geocoder: Arc<dyn Geocoder>,
    ) -> GenerateTripHandler {
        GenerateTripHandler::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            generator,
            geocoder,
        )
    }

    fn generated_activity(day: u32, order_index: u32, title: &str) -> GeneratedActivity {
        GeneratedActivity {
            day,
            title: title.to_string(),
            description: Some("Vivid description".to_string()),
            category: ActivityCategory::Activity,
            time: "10:00".to_string(),
            duration: Some("2 hours".to_string()),
            location: "Old town".to_string(),
            coordinates: None,
            image_keyword: Some("old town".to_string()),
            cost: 25.0,
            order_index,
            shadow_option: None,
        }
    }

    fn itinerary_payload() -> GeneratedItinerary {
        let mut hike = generated_activity(1, 0, "Coastal Hike");
        hike.shadow_option = Some(GeneratedShadow {
            title: "Beach Cafe Morning".to_string(),
            description: Some("Slow coffee by the sea".to_string()),
            category: ActivityCategory::Restaurant,
            time: "10:00".to_string(),
            duration: Some("1 hour".to_string()),
            location: "Promenade".to_string(),
            coordinates: None,
            cost: 10.0,
        });

        GeneratedItinerary {
            response: "Here is a three-day plan for Nice!".to_string(),
            trip: Some(GeneratedTrip {
                destination: "Nice, France".to_string(),
                coordinates: Some(Coordinates::new(43.7102, 7.262)),
                start_date: "2026-09-10".to_string(),
                end_date: "2026-09-13".to_string(),
                budget: 1200.0,
                activities: vec![hike, generated_activity(2, 0, "Market Tour")],
            }),
        }
    }

    #[tokio::test]
    async fn creates_trip_with_main_and_shadow_rows() {
        let store = Arc::new(InMemoryStore::new());
        let generator = Arc::new(MockGenerator::new().with_itinerary(itinerary_payload()));
        let handler = handler_with(&store, generator, Arc::new(NullGeocoder));

        let result = handler
            .handle(GenerateTripCommand {
                traveler_id: traveler(),
                content: "Plan a long weekend in Nice".to_string(),
            })
            .await
            .unwrap();

        let trip = result.trip.unwrap();
        assert_eq!(trip.destination, "Nice, France");
        assert_eq!(trip.spent, 0.0);

        let activities: Arc<dyn ActivityRepository> = store.clone();
        let mains = activities.list_by_trip(trip.id).await.unwrap();
        assert_eq!(mains.len(), 2);
        assert!(mains.iter().all(|a| !a.is_shadow_option));
        assert!(mains
            .iter()
            .all(|a| a.energy_level_requirement == EnergyLevel::High));

        let shadows = activities.list_shadows(trip.id).await.unwrap();
        assert_eq!(shadows.len(), 1);
        let hike = mains.iter().find(|a| a.title == "Coastal Hike").unwrap();
        assert!(shadows[0].shadows(hike.id));
        assert_eq!(shadows[0].energy_level_requirement, EnergyLevel::Low);
    }

    #[tokio::test]
    async fn stores_both_sides_of_the_conversation() {
        let store = Arc::new(InMemoryStore::new());
        let generator = Arc::new(MockGenerator::new().with_itinerary(itinerary_payload()));
        let handler = handler_with(&store, generator, Arc::new(NullGeocoder));

        let result = handler
            .handle(GenerateTripCommand {
                traveler_id: traveler(),
                content: "Plan a long weekend in Nice".to_string(),
            })
            .await
            .unwrap();

        let chat: Arc<dyn ChatMessageRepository> = store.clone();
        let messages = chat.list().await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "Plan a long weekend in Nice");
        assert_eq!(messages[1].trip_id, result.trip.map(|t| t.id));
    }

    #[tokio::test]
    async fn chat_only_reply_creates_no_trip() {
        let store = Arc::new(InMemoryStore::new());
        let generator = Arc::new(MockGenerator::new().with_itinerary(GeneratedItinerary {
            response: "Happy to help - where would you like to go?".to_string(),
            trip: None,
        }));
        let handler = handler_with(&store, generator, Arc::new(NullGeocoder));

        let result = handler
            .handle(GenerateTripCommand {
                traveler_id: traveler(),
                content: "hello".to_string(),
            })
            .await
            .unwrap();

        assert!(result.trip.is_none());
        assert!(result.message.trip_id.is_none());
    }

    #[tokio::test]
    async fn generator_failure_surfaces_and_keeps_no_trip() {
        let store = Arc::new(InMemoryStore::new());
        let generator =
            Arc::new(MockGenerator::new().failing(GeneratorError::unavailable("down")));
        let handler = handler_with(&store, generator, Arc::new(NullGeocoder));

        let result = handler
            .handle(GenerateTripCommand {
                traveler_id: traveler(),
                content: "Plan a trip to Lyon".to_string(),
            })
            .await;
        assert!(matches!(result, Err(GenerateTripError::GenerationFailed(_))));

        let trips: Arc<dyn TripRepository> = store.clone();
        assert!(trips.list_by_traveler(&traveler()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_content_is_rejected_before_any_write() {
        let store = Arc::new(InMemoryStore::new());
        let generator = Arc::new(MockGenerator::new());
        let handler = handler_with(&store, generator, Arc::new(NullGeocoder));

        let result = handler
            .handle(GenerateTripCommand {
                traveler_id: traveler(),
                content: "   ".to_string(),
            })
            .await;
        assert!(matches!(result, Err(GenerateTripError::EmptyContent)));

        let chat: Arc<dyn ChatMessageRepository> = store.clone();
        assert!(chat.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_activity_rows_are_dropped_not_fatal() {
        let store = Arc::new(InMemoryStore::new());
        let mut payload = itinerary_payload();
        // day 0 fails entity validation and must be skipped
        payload
            .trip
            .as_mut()
            .unwrap()
            .activities
            .push(generated_activity(0, 3, "Broken Row"));

        let generator = Arc::new(MockGenerator::new().with_itinerary(payload));
        let handler = handler_with(&store, generator, Arc::new(NullGeocoder));

        let result = handler
            .handle(GenerateTripCommand {
                traveler_id: traveler(),
                content: "Plan a long weekend in Nice".to_string(),
            })
            .await
            .unwrap();

        let activities: Arc<dyn ActivityRepository> = store.clone();
        let mains = activities
            .list_by_trip(result.trip.unwrap().id)
            .await
            .unwrap();
        assert_eq!(mains.len(), 2);
        assert!(mains.iter().all(|a| a.title != "Broken Row"));
    }

    struct FixedGeocoder(Coordinates);

    #[async_trait::async_trait]
    impl Geocoder for FixedGeocoder {
        async fn resolve(&self, _place: &str) -> Option<Coordinates> {
            Some(self.0)
        }
    }

    #[tokio::test]
    async fn unresolved_coordinates_are_backfilled() {
        let store = Arc::new(InMemoryStore::new());
        let mut payload = itinerary_payload();
        payload.trip.as_mut().unwrap().coordinates = Some(Coordinates::new(0.0, 0.0));

        let generator = Arc::new(MockGenerator::new().with_itinerary(payload));
        let geocoder = Arc::new(FixedGeocoder(Coordinates::new(43.7, 7.26)));
        let handler = handler_with(&store, generator, geocoder);

        let result = handler
            .handle(GenerateTripCommand {
                traveler_id: traveler(),
                content: "Plan a long weekend in Nice".to_string(),
            })
            .await
            .unwrap();

        let trip = result.trip.unwrap();
        assert_eq!(trip.coordinates, Some(Coordinates::new(43.7, 7.26)));

        let activities: Arc<dyn ActivityRepository> = store.clone();
        let mains = activities.list_by_trip(trip.id).await.unwrap();
        assert!(mains.iter().all(|a| !a.needs_geocoding()));
    }

    #[tokio::test]
    async fn geocoder_misses_leave_coordinates_unset() {
        let store = Arc::new(InMemoryStore::new());
        let generator = Arc::new(MockGenerator::new().with_itinerary(itinerary_payload()));
        let handler = handler_with(&store, generator, Arc::new(NullGeocoder));

        let result = handler
            .handle(GenerateTripCommand {
                traveler_id: traveler(),
                content: "Plan a long weekend in Nice".to_string(),
            })
            .await
            .unwrap();

        // trip had real coordinates from the payload; activities had none
        // and the null geocoder cannot resolve them - that is fine.
        let trip = result.trip.unwrap();
        assert!(!trip.needs_geocoding());

        let activities: Arc<dyn ActivityRepository> = store.clone();
        let mains = activities.list_by_trip(trip.id).await.unwrap();
        assert!(mains.iter().all(|a| a.coordinates.is_none()));
    }
}
