//! Pivot route group - mood readings and the pivot engine.

mod dto;
mod handlers;
mod routes;

pub use dto::{MoodReadingResponse, PivotLogResponse, PivotProposalResponse, RecordMoodResponse};
pub use routes::pivot_router;
