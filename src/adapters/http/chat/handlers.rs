//! HTTP handlers for the chat route group.

use axum::extract::{Json, Path, State};

use crate::application::handlers::{
    AdaptItineraryCommand, CareModeCommand, GenerateTripCommand,
};
use crate::domain::foundation::TripId;
use crate::ports::AdaptationContext;

use super::super::error::ApiError;
use super::super::state::AppState;
use super::super::traveler::TravelerContext;
use super::dto::{
    AdaptItineraryRequest, AdaptItineraryResponse, CareModeRequest, CareModeResponse,
    ChatMessageResponse, ChatSendRequest, ChatSendResponse,
};

/// GET /api/chat/messages
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChatMessageResponse>>, ApiError> {
    let messages = state.chat_messages.list().await?;
    Ok(Json(
        messages.into_iter().map(ChatMessageResponse::from).collect(),
    ))
}

/// POST /api/chat/send - may create a trip with its full itinerary
pub async fn send_message(
    State(state): State<AppState>,
    traveler: TravelerContext,
    Json(request): Json<ChatSendRequest>,
) -> Result<Json<ChatSendResponse>, ApiError> {
    let result = state
        .generate_trip_handler()
        .handle(GenerateTripCommand {
            traveler_id: traveler.traveler_id,
            content: request.content,
        })
        .await?;

    Ok(Json(ChatSendResponse {
        message: result.message.into(),
        trip: result.trip.map(Into::into),
    }))
}

/// POST /api/trips/:id/adapt
pub async fn adapt_itinerary(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
    Json(request): Json<AdaptItineraryRequest>,
) -> Result<Json<AdaptItineraryResponse>, ApiError> {
    let trip_id: TripId = trip_id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid trip ID format"))?;

    let suggestions = state
        .adapt_itinerary_handler()
        .handle(AdaptItineraryCommand {
            trip_id,
            context: AdaptationContext {
                weather: request.weather,
                time: request.time,
                budget_remaining: request.budget_remaining,
            },
        })
        .await?;

    Ok(Json(AdaptItineraryResponse { suggestions }))
}

/// POST /api/care-mode
pub async fn care_mode(
    State(state): State<AppState>,
    Json(request): Json<CareModeRequest>,
) -> Result<Json<CareModeResponse>, ApiError> {
    let plan = state
        .care_mode_handler()
        .handle(CareModeCommand {
            condition: request.condition,
            destination: request.destination,
            current_activity: request.current_activity,
        })
        .await?;
    Ok(Json(plan))
}
