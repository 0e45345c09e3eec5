//! Pivot log entity - append-only audit trail of itinerary pivots.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ActivityId, PivotLogId, Timestamp, TripId};

/// What caused a pivot to be committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotTrigger {
    /// The group agreed to the proposed swap.
    UserConsensus,
    /// A single traveler asked for the swap.
    UserRequest,
    /// Outside conditions (weather, closure) forced the change.
    ExternalCondition,
}

/// One audit entry for a committed pivot. Never mutated or deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotLog {
    pub id: PivotLogId,
    pub trip_id: TripId,
    pub previous_activity_id: Option<ActivityId>,
    pub new_activity_id: Option<ActivityId>,
    pub reason: Option<String>,
    pub trigger: PivotTrigger,
    pub created_at: Timestamp,
}

/// Data required to append a pivot log entry.
#[derive(Debug, Clone)]
pub struct NewPivotLog {
    pub trip_id: TripId,
    pub previous_activity_id: Option<ActivityId>,
    pub new_activity_id: Option<ActivityId>,
    pub reason: Option<String>,
    pub trigger: PivotTrigger,
}

impl PivotLog {
    /// Appends a log entry stamped at the current moment.
    pub fn append(new: NewPivotLog) -> Self {
        Self {
            id: PivotLogId::new(),
            trip_id: new.trip_id,
            previous_activity_id: new.previous_activity_id,
            new_activity_id: new.new_activity_id,
            reason: new.reason,
            trigger: new.trigger,
            created_at: Timestamp::now(),
        }
    }
}
