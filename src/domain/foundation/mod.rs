//! Foundation module - shared value objects and error types.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    ActivityId, BudgetItemId, ChatMessageId, MoodReadingId, PivotLogId, PreferencesId,
    TravelerId, TripId,
};
pub use timestamp::Timestamp;
