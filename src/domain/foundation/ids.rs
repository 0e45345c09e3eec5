//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for a trip.
    TripId
);
uuid_id!(
    /// Unique identifier for an itinerary activity (main or shadow).
    ActivityId
);
uuid_id!(
    /// Unique identifier for a budget ledger item.
    BudgetItemId
);
uuid_id!(
    /// Unique identifier for a mood reading.
    MoodReadingId
);
uuid_id!(
    /// Unique identifier for a pivot audit log entry.
    PivotLogId
);
uuid_id!(
    /// Unique identifier for a chat message.
    ChatMessageId
);
uuid_id!(
    /// Unique identifier for a traveler preferences record.
    PreferencesId
);

/// Identity of the traveler issuing an operation.
///
/// String-backed rather than UUID-backed: the identity comes from the
/// caller (an auth header in the HTTP layer), not from this process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TravelerId(String);

impl TravelerId {
    /// Creates a traveler identity, rejecting empty or oversized values.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::empty_field("traveler_id"));
        }
        if value.len() > 128 {
            return Err(ValidationError::invalid_format(
                "traveler_id",
                "exceeds 128 characters",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TravelerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
