//! HTTP DTOs for the chat route group.

use serde::{Deserialize, Serialize};

use crate::domain::trip::{ChatMessage, ChatRole};
use crate::ports::CareModePlan;

use super::super::trip::TripResponse;

// ════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════

/// Request to send a chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatSendRequest {
    pub content: String,
}

/// Request for adaptation suggestions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptItineraryRequest {
    pub weather: Option<String>,
    pub time: Option<String>,
    pub budget_remaining: Option<f64>,
}

/// Request for a Care Mode plan.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareModeRequest {
    pub condition: String,
    pub destination: String,
    pub current_activity: Option<String>,
}

// ════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════

/// One chat message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageResponse {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub trip_id: Option<String>,
    pub created_at: String,
}

impl From<ChatMessage> for ChatMessageResponse {
    fn from(message: ChatMessage) -> Self {
        Self {
            id: message.id.to_string(),
            role: message.role,
            content: message.content,
            trip_id: message.trip_id.map(|id| id.to_string()),
            created_at: message.created_at.to_rfc3339(),
        }
    }
}

/// Assistant reply plus the trip it created, if any.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSendResponse {
    pub message: ChatMessageResponse,
    pub trip: Option<TripResponse>,
}

/// Adaptation suggestions.
#[derive(Debug, Clone, Serialize)]
pub struct AdaptItineraryResponse {
    pub suggestions: String,
}

/// Care Mode plan passthrough.
pub type CareModeResponse = CareModePlan;
