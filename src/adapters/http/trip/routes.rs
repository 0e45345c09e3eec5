//! Route configuration for the trip group.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use super::super::state::AppState;
use super::handlers;

/// Creates the trip router.
///
/// Routes:
/// - `GET/PATCH /api/preferences`
/// - `GET/POST /api/trips`, `GET/PATCH /api/trips/:id`
/// - `GET /api/trips/:id/activities`, `GET /api/trips/:id/activities/shadows`
/// - `POST /api/activities`, `PATCH /api/activities/:id`
/// - `GET /api/trips/:id/budget`, `POST /api/budget`, `DELETE /api/budget/:id`
pub fn trip_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/preferences",
            get(handlers::get_preferences).patch(handlers::update_preferences),
        )
        .route(
            "/api/trips",
            get(handlers::list_trips).post(handlers::create_trip),
        )
        .route(
            "/api/trips/:id",
            get(handlers::get_trip).patch(handlers::update_trip),
        )
        .route("/api/trips/:id/activities", get(handlers::list_activities))
        .route(
            "/api/trips/:id/activities/shadows",
            get(handlers::list_shadow_activities),
        )
        .route("/api/activities", post(handlers::create_activity))
        .route("/api/activities/:id", patch(handlers::update_activity))
        .route("/api/trips/:id/budget", get(handlers::list_budget_items))
        .route("/api/budget", post(handlers::create_budget_item))
        .route("/api/budget/:id", delete(handlers::delete_budget_item))
}
