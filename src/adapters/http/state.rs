//! Shared application state and router assembly.

use std::sync::Arc;

use axum::Router;

use crate::application::handlers::{
    AdaptItineraryHandler, CareModeHandler, ConfirmPivotHandler, CreateBudgetItemHandler,
    DeleteBudgetItemHandler, GenerateTripHandler, GetOrCreatePreferencesHandler,
    ProposePivotHandler, RecordMoodHandler, UpdateActivityHandler, UpdatePreferencesHandler,
};
use crate::application::BudgetLedger;
use crate::domain::foundation::TravelerId;
use crate::domain::pivot::PivotPolicy;
use crate::ports::{
    ActivityRepository, BudgetItemRepository, ChatMessageRepository, Geocoder,
    ItineraryGenerator, MoodReadingRepository, PivotCommitter, PivotLogRepository,
    PreferencesRepository, TripRepository,
};

/// Shared application state: every port plus request-independent policy.
#[derive(Clone)]
pub struct AppState {
    pub trips: Arc<dyn TripRepository>,
    pub activities: Arc<dyn ActivityRepository>,
    pub budget_items: Arc<dyn BudgetItemRepository>,
    pub mood_readings: Arc<dyn MoodReadingRepository>,
    pub pivot_logs: Arc<dyn PivotLogRepository>,
    pub preferences: Arc<dyn PreferencesRepository>,
    pub chat_messages: Arc<dyn ChatMessageRepository>,
    pub pivot_committer: Arc<dyn PivotCommitter>,
    pub generator: Arc<dyn ItineraryGenerator>,
    pub geocoder: Arc<dyn Geocoder>,
    pub ledger: Arc<BudgetLedger>,
    pub pivot_policy: PivotPolicy,
    /// Identity used when a request carries no `X-Traveler-Id` header.
    pub default_traveler: TravelerId,
}

impl AppState {
    pub fn record_mood_handler(&self) -> RecordMoodHandler {
        RecordMoodHandler::new(
            self.trips.clone(),
            self.mood_readings.clone(),
            self.pivot_policy,
        )
    }

    pub fn propose_pivot_handler(&self) -> ProposePivotHandler {
        ProposePivotHandler::new(
            self.trips.clone(),
            self.activities.clone(),
            self.generator.clone(),
        )
    }

    pub fn confirm_pivot_handler(&self) -> ConfirmPivotHandler {
        ConfirmPivotHandler::new(self.pivot_committer.clone(), self.ledger.clone())
    }

    pub fn update_activity_handler(&self) -> UpdateActivityHandler {
        UpdateActivityHandler::new(self.activities.clone(), self.ledger.clone())
    }

    pub fn create_budget_item_handler(&self) -> CreateBudgetItemHandler {
        CreateBudgetItemHandler::new(self.ledger.clone())
    }

    pub fn delete_budget_item_handler(&self) -> DeleteBudgetItemHandler {
        DeleteBudgetItemHandler::new(self.ledger.clone())
    }

    pub fn generate_trip_handler(&self) -> GenerateTripHandler {
        GenerateTripHandler::new(
            self.trips.clone(),
            self.activities.clone(),
            self.preferences.clone(),
            self.chat_messages.clone(),
            self.generator.clone(),
            self.geocoder.clone(),
        )
    }

    pub fn adapt_itinerary_handler(&self) -> AdaptItineraryHandler {
        AdaptItineraryHandler::new(
            self.trips.clone(),
            self.activities.clone(),
            self.generator.clone(),
        )
    }

    pub fn care_mode_handler(&self) -> CareModeHandler {
        CareModeHandler::new(self.generator.clone())
    }

    pub fn get_preferences_handler(&self) -> GetOrCreatePreferencesHandler {
        GetOrCreatePreferencesHandler::new(self.preferences.clone())
    }

    pub fn update_preferences_handler(&self) -> UpdatePreferencesHandler {
        UpdatePreferencesHandler::new(self.preferences.clone())
    }
}

/// Assembles the full API router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(super::trip::trip_router())
        .merge(super::pivot::pivot_router())
        .merge(super::chat::chat_router())
        .with_state(state)
}
