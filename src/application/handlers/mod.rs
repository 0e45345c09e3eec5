//! Command handlers - one per externally triggered operation.

mod adapt_itinerary;
mod care_mode;
mod confirm_pivot;
mod create_budget_item;
mod generate_trip;
mod preferences;
mod propose_pivot;
mod record_mood;
mod update_activity;

pub use adapt_itinerary::{AdaptItineraryCommand, AdaptItineraryError, AdaptItineraryHandler};
pub use care_mode::{CareModeCommand, CareModeError, CareModeHandler};
pub use confirm_pivot::{ConfirmPivotCommand, ConfirmPivotError, ConfirmPivotHandler, ConfirmPivotResult};
pub use create_budget_item::{
    CreateBudgetItemCommand, CreateBudgetItemError, CreateBudgetItemHandler,
    CreateBudgetItemResult, DeleteBudgetItemHandler,
};
pub use generate_trip::{GenerateTripCommand, GenerateTripError, GenerateTripHandler, GenerateTripResult};
pub use preferences::{GetOrCreatePreferencesHandler, UpdatePreferencesHandler};
pub use propose_pivot::{ProposePivotCommand, ProposePivotError, ProposePivotHandler};
pub use record_mood::{RecordMoodCommand, RecordMoodError, RecordMoodHandler, RecordMoodResult};
pub use update_activity::{
    UpdateActivityCommand, UpdateActivityError, UpdateActivityHandler, UpdateActivityResult,
};
