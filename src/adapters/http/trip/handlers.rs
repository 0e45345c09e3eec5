//! HTTP handlers for the trip route group.

use std::collections::HashSet;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::application::handlers::{CreateBudgetItemCommand, UpdateActivityCommand};
use crate::domain::foundation::{ActivityId, BudgetItemId, TripId};
use crate::domain::trip::{ActivityPatch, EnergyLevel, NewActivity, NewTrip};

use super::super::error::ApiError;
use super::super::state::AppState;
use super::super::traveler::TravelerContext;
use super::dto::{
    ActivityResponse, BudgetItemResponse, CreateActivityRequest, CreateBudgetItemRequest,
    CreateTripRequest, PreferencesResponse, TripResponse, UpdateActivityRequest,
    UpdatePreferencesRequest, UpdateTripRequest,
};

fn parse_trip_id(raw: &str) -> Result<TripId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid trip ID format"))
}

fn parse_activity_id(raw: &str) -> Result<ActivityId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid activity ID format"))
}

// ════════════════════════════════════════════════════════════════════
// Preferences
// ════════════════════════════════════════════════════════════════════

/// GET /api/preferences
pub async fn get_preferences(
    State(state): State<AppState>,
    traveler: TravelerContext,
) -> Result<Json<PreferencesResponse>, ApiError> {
    let prefs = state
        .get_preferences_handler()
        .handle(&traveler.traveler_id)
        .await?;
    Ok(Json(prefs.into()))
}

/// PATCH /api/preferences
pub async fn update_preferences(
    State(state): State<AppState>,
    traveler: TravelerContext,
    Json(request): Json<UpdatePreferencesRequest>,
) -> Result<Json<PreferencesResponse>, ApiError> {
    let prefs = state
        .update_preferences_handler()
        .handle(&traveler.traveler_id, request.into())
        .await?;
    Ok(Json(prefs.into()))
}

// ════════════════════════════════════════════════════════════════════
// Trips
// ════════════════════════════════════════════════════════════════════

/// GET /api/trips
pub async fn list_trips(
    State(state): State<AppState>,
    traveler: TravelerContext,
) -> Result<Json<Vec<TripResponse>>, ApiError> {
    let trips = state.trips.list_by_traveler(&traveler.traveler_id).await?;
    Ok(Json(trips.into_iter().map(TripResponse::from).collect()))
}

/// GET /api/trips/:id
pub async fn get_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<Json<TripResponse>, ApiError> {
    let trip_id = parse_trip_id(&trip_id)?;
    let trip = state
        .trips
        .find_by_id(trip_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Trip not found: {}", trip_id)))?;
    Ok(Json(trip.into()))
}

/// POST /api/trips
pub async fn create_trip(
    State(state): State<AppState>,
    traveler: TravelerContext,
    Json(request): Json<CreateTripRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let trip = state
        .trips
        .create(NewTrip {
            traveler_id: traveler.traveler_id,
            destination: request.destination,
            start_date: request.start_date,
            end_date: request.end_date,
            budget: request.budget,
            image_url: request.image_url,
            coordinates: request.coordinates,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(TripResponse::from(trip))))
}

/// PATCH /api/trips/:id
pub async fn update_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
    Json(request): Json<UpdateTripRequest>,
) -> Result<Json<TripResponse>, ApiError> {
    let trip_id = parse_trip_id(&trip_id)?;
    let trip = state
        .trips
        .update(
            trip_id,
            request.destination,
            request.start_date,
            request.end_date,
            request.budget,
            request.image_url,
        )
        .await?;
    Ok(Json(trip.into()))
}

// ════════════════════════════════════════════════════════════════════
// Activities
// ════════════════════════════════════════════════════════════════════

/// GET /api/trips/:id/activities - main itinerary, shadows excluded
pub async fn list_activities(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<Json<Vec<ActivityResponse>>, ApiError> {
    let trip_id = parse_trip_id(&trip_id)?;
    let activities = state.activities.list_by_trip(trip_id).await?;
    Ok(Json(
        activities.into_iter().map(ActivityResponse::from).collect(),
    ))
}

/// GET /api/trips/:id/activities/shadows - shadow options only
pub async fn list_shadow_activities(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<Json<Vec<ActivityResponse>>, ApiError> {
    let trip_id = parse_trip_id(&trip_id)?;
    let shadows = state.activities.list_shadows(trip_id).await?;
    Ok(Json(
        shadows.into_iter().map(ActivityResponse::from).collect(),
    ))
}

/// POST /api/activities
pub async fn create_activity(
    State(state): State<AppState>,
    Json(request): Json<CreateActivityRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let trip_id = parse_trip_id(&request.trip_id)?;
    state
        .trips
        .find_by_id(trip_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Trip not found: {}", trip_id)))?;

    let parent_activity_id = request
        .parent_activity_id
        .as_deref()
        .map(parse_activity_id)
        .transpose()?;

    let activity = state
        .activities
        .create(NewActivity {
            trip_id,
            day: request.day,
            title: request.title,
            description: request.description,
            category: request.category,
            time: request.time,
            duration: request.duration,
            location: request.location,
            coordinates: request.coordinates,
            image_url: request.image_url,
            image_keyword: None,
            cost: request.cost,
            order_index: request.order_index,
            energy_level_requirement: request
                .energy_level_requirement
                .unwrap_or(EnergyLevel::High),
            is_shadow_option: request.is_shadow_option,
            parent_activity_id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ActivityResponse::from(activity))))
}

/// Wire-level field names an activity patch may carry. Everything else
/// (id, tripId, parentActivityId, createdAt, ...) is dropped before the
/// patch reaches the store.
static ALLOWED_PATCH_FIELDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "title",
        "description",
        "category",
        "time",
        "duration",
        "location",
        "cost",
        "completed",
        "energyLevelRequirement",
        "isShadowOption",
        "imageUrl",
    ]
    .into_iter()
    .collect()
});

/// Narrows a generic JSON patch to the allow-listed fields.
fn narrow_activity_patch(value: Value) -> Result<ActivityPatch, ApiError> {
    let Value::Object(fields) = value else {
        return Err(ApiError::bad_request("expected a JSON object"));
    };

    let mut allowed = serde_json::Map::new();
    for (key, field_value) in fields {
        if ALLOWED_PATCH_FIELDS.contains(key.as_str()) {
            allowed.insert(key, field_value);
        } else {
            tracing::warn!(field = %key, "blocked update to field outside the allow-list");
        }
    }

    let request: UpdateActivityRequest = serde_json::from_value(Value::Object(allowed))
        .map_err(|e| ApiError::bad_request(format!("Invalid activity patch: {}", e)))?;
    Ok(request.into())
}

/// PATCH /api/activities/:id - completion flips recompute trip spend
pub async fn update_activity(
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<ActivityResponse>, ApiError> {
    let activity_id = parse_activity_id(&activity_id)?;
    let patch = narrow_activity_patch(body)?;

    let result = state
        .update_activity_handler()
        .handle(UpdateActivityCommand { activity_id, patch })
        .await?;
    Ok(Json(result.activity.into()))
}

// ════════════════════════════════════════════════════════════════════
// Budget
// ════════════════════════════════════════════════════════════════════

/// GET /api/trips/:id/budget
pub async fn list_budget_items(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<Json<Vec<BudgetItemResponse>>, ApiError> {
    let trip_id = parse_trip_id(&trip_id)?;
    let items = state.budget_items.list_by_trip(trip_id).await?;
    Ok(Json(
        items.into_iter().map(BudgetItemResponse::from).collect(),
    ))
}

/// POST /api/budget - trip spend recomputes as a side effect
pub async fn create_budget_item(
    State(state): State<AppState>,
    Json(request): Json<CreateBudgetItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let trip_id = parse_trip_id(&request.trip_id)?;
    let result = state
        .create_budget_item_handler()
        .handle(CreateBudgetItemCommand {
            trip_id,
            category: request.category,
            amount: request.amount,
            description: request.description,
            date: request.date,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(BudgetItemResponse::from(result.item)),
    ))
}

/// DELETE /api/budget/:id - trip spend recomputes as a side effect
pub async fn delete_budget_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let item_id: BudgetItemId = item_id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid budget item ID format"))?;
    state.delete_budget_item_handler().handle(item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
