//! HTTP handlers for the pivot route group.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{ConfirmPivotCommand, ProposePivotCommand, RecordMoodCommand};
use crate::domain::foundation::{ActivityId, TripId};
use crate::ports::PivotContext;

use super::super::error::ApiError;
use super::super::state::AppState;
use super::super::traveler::TravelerContext;
use super::super::trip::ActivityResponse;
use super::dto::{
    ConfirmPivotRequest, MoodReadingResponse, PivotLogResponse, PivotProposalResponse,
    ProposePivotRequest, RecordMoodRequest, RecordMoodResponse,
};

fn parse_trip_id(raw: &str) -> Result<TripId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid trip ID format"))
}

fn parse_activity_id(raw: &str) -> Result<ActivityId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid activity ID format"))
}

/// POST /api/trips/:id/mood
pub async fn record_mood(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
    traveler: TravelerContext,
    Json(request): Json<RecordMoodRequest>,
) -> Result<Json<RecordMoodResponse>, ApiError> {
    let trip_id = parse_trip_id(&trip_id)?;
    let result = state
        .record_mood_handler()
        .handle(RecordMoodCommand {
            trip_id,
            traveler_id: traveler.traveler_id,
            energy_level: request.energy_level,
        })
        .await?;

    Ok(Json(RecordMoodResponse {
        reading: result.reading.into(),
        should_pivot: result.should_pivot,
    }))
}

/// GET /api/trips/:id/mood
pub async fn list_mood_readings(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<Json<Vec<MoodReadingResponse>>, ApiError> {
    let trip_id = parse_trip_id(&trip_id)?;
    let readings = state.mood_readings.list_by_trip(trip_id).await?;
    Ok(Json(
        readings.into_iter().map(MoodReadingResponse::from).collect(),
    ))
}

/// POST /api/trips/:id/pivot
pub async fn propose_pivot(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
    Json(request): Json<ProposePivotRequest>,
) -> Result<Json<PivotProposalResponse>, ApiError> {
    let trip_id = parse_trip_id(&trip_id)?;
    let current_activity_id = parse_activity_id(&request.current_activity_id)?;

    let proposal = state
        .propose_pivot_handler()
        .handle(ProposePivotCommand {
            trip_id,
            current_activity_id,
            context: PivotContext {
                location: request.location,
                time: request.time,
                budget_remaining: request.budget_remaining,
                group_mood: request.group_mood.unwrap_or_else(|| "low".to_string()),
            },
        })
        .await?;

    Ok(Json(proposal.into()))
}

/// POST /api/trips/:id/pivot/confirm
pub async fn confirm_pivot(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
    Json(request): Json<ConfirmPivotRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let trip_id = parse_trip_id(&trip_id)?;
    let old_activity_id = parse_activity_id(&request.old_activity_id)?;

    let result = state
        .confirm_pivot_handler()
        .handle(ConfirmPivotCommand {
            trip_id,
            old_activity_id,
            new_activity: request.new_activity_data,
            reason: request.reason,
            trigger: request.trigger,
        })
        .await?;

    Ok((StatusCode::OK, Json(ActivityResponse::from(result.activity))))
}

/// GET /api/trips/:id/pivot/logs
pub async fn list_pivot_logs(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<Json<Vec<PivotLogResponse>>, ApiError> {
    let trip_id = parse_trip_id(&trip_id)?;
    let logs = state.pivot_logs.list_by_trip(trip_id).await?;
    Ok(Json(logs.into_iter().map(PivotLogResponse::from).collect()))
}
