//! Route configuration for the chat group.

use axum::routing::{get, post};
use axum::Router;

use super::super::state::AppState;
use super::handlers;

/// Creates the chat router.
///
/// Routes:
/// - `GET /api/chat/messages` - conversation history, oldest first
/// - `POST /api/chat/send` - chat turn, may generate a trip
/// - `POST /api/trips/:id/adapt` - adaptation suggestions
/// - `POST /api/care-mode` - wellness micro-itinerary
pub fn chat_router() -> Router<AppState> {
    Router::new()
        .route("/api/chat/messages", get(handlers::list_messages))
        .route("/api/chat/send", post(handlers::send_message))
        .route("/api/trips/:id/adapt", post(handlers::adapt_itinerary))
        .route("/api/care-mode", post(handlers::care_mode))
}
