//! HTTP DTOs for the pivot route group.

use serde::{Deserialize, Serialize};

use crate::domain::pivot::{PivotProposal, ProposedActivity};
use crate::domain::trip::{EnergyLevel, MoodReading, PivotLog, PivotTrigger};

// ════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════

/// Request to record a mood reading.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMoodRequest {
    pub energy_level: EnergyLevel,
}

/// Request to propose a pivot for an activity.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposePivotRequest {
    pub current_activity_id: String,
    pub location: String,
    pub time: String,
    #[serde(default)]
    pub budget_remaining: f64,
    /// Defaults to "low"; a pivot is usually proposed because energy fell.
    pub group_mood: Option<String>,
}

/// Request to confirm a pivot.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPivotRequest {
    pub old_activity_id: String,
    pub new_activity_data: ProposedActivity,
    pub reason: Option<String>,
    pub trigger: Option<PivotTrigger>,
}

// ════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════

/// Stored mood reading.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodReadingResponse {
    pub id: String,
    pub trip_id: String,
    pub traveler_id: String,
    pub energy_level: EnergyLevel,
    pub recorded_at: String,
}

impl From<MoodReading> for MoodReadingResponse {
    fn from(reading: MoodReading) -> Self {
        Self {
            id: reading.id.to_string(),
            trip_id: reading.trip_id.to_string(),
            traveler_id: reading.traveler_id.to_string(),
            energy_level: reading.energy_level,
            recorded_at: reading.recorded_at.to_rfc3339(),
        }
    }
}

/// Reading plus the pivot decision.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMoodResponse {
    pub reading: MoodReadingResponse,
    pub should_pivot: bool,
}

/// A computed pivot proposal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotProposalResponse {
    pub proposal: String,
    pub new_activity: ProposedActivity,
    pub is_pre_planned: bool,
}

impl From<PivotProposal> for PivotProposalResponse {
    fn from(proposal: PivotProposal) -> Self {
        Self {
            proposal: proposal.proposal,
            new_activity: proposal.new_activity,
            is_pre_planned: proposal.is_pre_planned,
        }
    }
}

/// One pivot audit entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotLogResponse {
    pub id: String,
    pub trip_id: String,
    pub previous_activity_id: Option<String>,
    pub new_activity_id: Option<String>,
    pub reason: Option<String>,
    pub trigger: PivotTrigger,
    pub created_at: String,
}

impl From<PivotLog> for PivotLogResponse {
    fn from(log: PivotLog) -> Self {
        Self {
            id: log.id.to_string(),
            trip_id: log.trip_id.to_string(),
            previous_activity_id: log.previous_activity_id.map(|id| id.to_string()),
            new_activity_id: log.new_activity_id.map(|id| id.to_string()),
            reason: log.reason,
            trigger: log.trigger,
            created_at: log.created_at.to_rfc3339(),
        }
    }
}
