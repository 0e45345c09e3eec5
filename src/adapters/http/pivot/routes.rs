//! Route configuration for the pivot group.

use axum::routing::{get, post};
use axum::Router;

use super::super::state::AppState;
use super::handlers;

/// Creates the pivot router.
///
/// Routes:
/// - `POST /api/trips/:id/mood` - record a reading, returns shouldPivot
/// - `GET /api/trips/:id/mood` - reading history, most recent first
/// - `POST /api/trips/:id/pivot` - propose a replacement
/// - `POST /api/trips/:id/pivot/confirm` - commit the swap
/// - `GET /api/trips/:id/pivot/logs` - audit trail, most recent first
pub fn pivot_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/trips/:id/mood",
            get(handlers::list_mood_readings).post(handlers::record_mood),
        )
        .route("/api/trips/:id/pivot", post(handlers::propose_pivot))
        .route(
            "/api/trips/:id/pivot/confirm",
            post(handlers::confirm_pivot),
        )
        .route("/api/trips/:id/pivot/logs", get(handlers::list_pivot_logs))
}
