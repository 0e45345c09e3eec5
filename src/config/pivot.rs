//! Pivot policy configuration.

use serde::Deserialize;

use crate::domain::pivot::PivotPolicy;

use super::ConfigError;

/// Named policy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Any single low reading triggers a pivot.
    AnyLow,
    /// A fraction of recent readings must be low.
    LowFraction,
}

fn default_threshold() -> f64 {
    0.4
}

fn default_window() -> usize {
    5
}

/// Pivot decision settings. The two policies are alternatives; the
/// threshold and window only apply to `low_fraction`.
#[derive(Debug, Clone, Deserialize)]
pub struct PivotConfig {
    #[serde(default = "PivotConfig::default_policy")]
    pub policy: PolicyKind,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_window")]
    pub window: usize,
}

impl PivotConfig {
    fn default_policy() -> PolicyKind {
        PolicyKind::AnyLow
    }

    /// Resolves the configured policy.
    pub fn to_policy(&self) -> PivotPolicy {
        match self.policy {
            PolicyKind::AnyLow => PivotPolicy::AnyLowReading,
            PolicyKind::LowFraction => PivotPolicy::LowFraction {
                threshold: self.threshold,
                window: self.window,
            },
        }
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.policy == PolicyKind::LowFraction {
            if !(0.0..=1.0).contains(&self.threshold) {
                return Err(ConfigError::invalid(
                    "pivot.threshold",
                    "must be between 0 and 1",
                ));
            }
            if self.window == 0 {
                return Err(ConfigError::invalid("pivot.window", "must be > 0"));
            }
        }
        Ok(())
    }
}

impl Default for PivotConfig {
    fn default() -> Self {
        Self {
            policy: Self::default_policy(),
            threshold: default_threshold(),
            window: default_window(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_any_low() {
        assert_eq!(PivotConfig::default().to_policy(), PivotPolicy::AnyLowReading);
    }

    #[test]
    fn low_fraction_policy_carries_threshold_and_window() {
        let config = PivotConfig {
            policy: PolicyKind::LowFraction,
            threshold: 0.4,
            window: 5,
        };
        assert_eq!(
            config.to_policy(),
            PivotPolicy::LowFraction {
                threshold: 0.4,
                window: 5
            }
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn out_of_range_threshold_fails_validation() {
        let config = PivotConfig {
            policy: PolicyKind::LowFraction,
            threshold: 1.5,
            window: 5,
        };
        assert!(config.validate().is_err());
    }
}
