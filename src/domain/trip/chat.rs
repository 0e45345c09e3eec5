//! Chat message entity - the conversation that drives trip generation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ChatMessageId, Timestamp, TripId};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One message in the planning conversation. Assistant messages that
/// produced a trip carry its id.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: ChatMessageId,
    pub role: ChatRole,
    pub content: String,
    pub trip_id: Option<TripId>,
    pub created_at: Timestamp,
}

impl ChatMessage {
    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: ChatMessageId::new(),
            role: ChatRole::User,
            content: content.into(),
            trip_id: None,
            created_at: Timestamp::now(),
        }
    }

    /// Creates an assistant message, optionally referencing a created trip.
    pub fn assistant(content: impl Into<String>, trip_id: Option<TripId>) -> Self {
        Self {
            id: ChatMessageId::new(),
            role: ChatRole::Assistant,
            content: content.into(),
            trip_id,
            created_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_have_no_trip_reference() {
        let msg = ChatMessage::user("Plan a trip to Paris");
        assert_eq!(msg.role, ChatRole::User);
        assert!(msg.trip_id.is_none());
    }

    #[test]
    fn assistant_messages_can_reference_a_trip() {
        let trip_id = TripId::new();
        let msg = ChatMessage::assistant("Here is your itinerary", Some(trip_id));
        assert_eq!(msg.role, ChatRole::Assistant);
        assert_eq!(msg.trip_id, Some(trip_id));
    }
}
