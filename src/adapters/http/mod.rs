//! HTTP adapters - axum routers, DTOs, and handlers.
//!
//! Route groups:
//! - `trip` - preferences, trips, activities, budget
//! - `pivot` - mood readings, pivot proposal/confirm, audit log
//! - `chat` - conversation, trip generation, adaptation, care mode

mod chat;
mod error;
mod pivot;
mod state;
mod traveler;
mod trip;

pub use error::{ApiError, ErrorResponse};
pub use state::{app_router, AppState};
pub use traveler::TravelerContext;
