//! Energy level - the coarse three-value mood signal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Energy level attached to mood readings and activity requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

impl EnergyLevel {
    /// Returns true for the low reading that can trigger a pivot.
    pub fn is_low(&self) -> bool {
        matches!(self, EnergyLevel::Low)
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EnergyLevel::Low => "low",
            EnergyLevel::Medium => "medium",
            EnergyLevel::High => "high",
        };
        write!(f, "{}", s)
    }
}
