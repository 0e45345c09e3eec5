//! Itinerary generator port - interface to the external LLM service.
//!
//! The generator is a black box: natural-language text and preference
//! context go in, structured itinerary or proposal JSON comes out. It may
//! fail outright or return content that does not parse; both surface as
//! [`GeneratorError`] and are mapped to a retryable `GenerationFailed` at
//! the operation boundary. Adapters own prompt construction and the strict
//! validation of whatever the model returns; the types below are already
//! validated.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::pivot::ProposedActivity;
use crate::domain::trip::{Activity, ActivityCategory, Coordinates, TravelerPreferences};

/// Port for the external LLM-backed content generator.
#[async_trait]
pub trait ItineraryGenerator: Send + Sync {
    /// One-shot itinerary generation from a free-form travel request.
    ///
    /// Returns a conversational reply and, when the request was an actual
    /// trip ask, a full trip payload with shadow options attached.
    async fn generate_itinerary(
        &self,
        user_text: &str,
        preferences: Option<&TravelerPreferences>,
    ) -> Result<GeneratedItinerary, GeneratorError>;

    /// Synthesizes a low-energy replacement for one planned activity.
    async fn pivot_proposal(
        &self,
        activity: &Activity,
        context: &PivotContext,
    ) -> Result<PivotProposalPayload, GeneratorError>;

    /// Free-text adaptation suggestions for a trip's current itinerary.
    async fn adapt_itinerary(
        &self,
        activities_summary: &str,
        context: &AdaptationContext,
    ) -> Result<String, GeneratorError>;

    /// Wellness micro-itinerary for one unwell traveler.
    async fn care_plan(
        &self,
        condition: &str,
        destination: &str,
        current_activity: Option<&str>,
    ) -> Result<CareModePlan, GeneratorError>;
}

/// Result of a one-shot itinerary generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedItinerary {
    /// Conversational reply shown to the traveler.
    pub response: String,
    /// Present only when the request was a trip ask.
    pub trip: Option<GeneratedTrip>,
}

/// A generated trip payload, validated by the adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTrip {
    pub destination: String,
    pub coordinates: Option<Coordinates>,
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
    pub activities: Vec<GeneratedActivity>,
}

/// One generated main activity, with an optional attached shadow option.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedActivity {
    pub day: u32,
    pub title: String,
    pub description: Option<String>,
    pub category: ActivityCategory,
    pub time: String,
    pub duration: Option<String>,
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub image_keyword: Option<String>,
    pub cost: f64,
    pub order_index: u32,
    pub shadow_option: Option<GeneratedShadow>,
}

/// A generated low-energy alternative attached to a main activity.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedShadow {
    pub title: String,
    pub description: Option<String>,
    pub category: ActivityCategory,
    pub time: String,
    pub duration: Option<String>,
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub cost: f64,
}

/// Situation handed to the generator when synthesizing a pivot proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotContext {
    pub location: String,
    pub time: String,
    pub budget_remaining: f64,
    pub group_mood: String,
}

/// A generated pivot proposal.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotProposalPayload {
    pub proposal: String,
    pub new_activity: ProposedActivity,
}

/// Situation handed to the generator for adaptation suggestions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdaptationContext {
    pub weather: Option<String>,
    pub time: Option<String>,
    pub budget_remaining: Option<f64>,
}

/// A generated wellness plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareModePlan {
    pub condition: String,
    pub personal_plan: Vec<CarePlanStep>,
    pub group_plan: Vec<GroupAdjustment>,
    pub recheck_in_minutes: u32,
}

/// One calm, safe step for the unwell traveler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlanStep {
    pub title: String,
    pub description: String,
    pub recommended_duration: Option<String>,
    pub place_type: Option<String>,
    pub image_keyword: Option<String>,
    pub coordinates: Option<Coordinates>,
}

/// One minimal adjustment for the rest of the group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupAdjustment {
    pub title: String,
    pub description: String,
    pub recommended_adjustment: Option<String>,
    pub reasoning: Option<String>,
    pub image_keyword: Option<String>,
}

/// Generator failure modes.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Rate limited by the provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },

    /// The provider answered but the content does not match the expected
    /// shape.
    #[error("unparseable content: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl GeneratorError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if a caller may reasonably retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GeneratorError::RateLimited { .. }
                | GeneratorError::Unavailable { .. }
                | GeneratorError::Network(_)
                | GeneratorError::Timeout { .. }
        )
    }
}
