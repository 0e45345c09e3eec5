//! Pivot decision policy.
//!
//! Two policies exist and are never blended: the default treats any single
//! low reading as a trigger; the group policy looks at the fraction of low
//! readings across a recent window.

use serde::{Deserialize, Serialize};

use crate::domain::trip::MoodReading;

/// Policy deciding whether a just-recorded reading should trigger a pivot
/// proposal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PivotPolicy {
    /// Any single low reading triggers. Matches the single-submitter flow.
    AnyLowReading,
    /// Triggers when at least `threshold` (0..=1) of the most recent
    /// `window` readings (including the new one) are low.
    LowFraction { threshold: f64, window: usize },
}

impl Default for PivotPolicy {
    fn default() -> Self {
        PivotPolicy::AnyLowReading
    }
}

impl PivotPolicy {
    /// Decides on the reading just appended. `history` is the trip's
    /// reading log, most recent first, including `reading` itself.
    pub fn should_pivot(&self, reading: &MoodReading, history: &[MoodReading]) -> bool {
        match *self {
            PivotPolicy::AnyLowReading => reading.energy_level.is_low(),
            PivotPolicy::LowFraction { threshold, window } => {
                if window == 0 {
                    return false;
                }
                let recent = &history[..history.len().min(window)];
                if recent.is_empty() {
                    return false;
                }
                let low = recent.iter().filter(|r| r.energy_level.is_low()).count();
                (low as f64 / recent.len() as f64) >= threshold
            }
        }
    }
}
