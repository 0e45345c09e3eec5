//! Fallback identity configuration.
//!
//! Identity is caller-supplied per request; this default only covers
//! requests that arrive without an `X-Traveler-Id` header (the single-user
//! deployment).

use serde::Deserialize;

use crate::domain::foundation::TravelerId;

use super::ConfigError;

fn default_traveler() -> String {
    "default-traveler".to_string()
}

/// Identity fallback settings.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    #[serde(default = "default_traveler")]
    pub default_traveler: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            default_traveler: default_traveler(),
        }
    }
}

impl IdentityConfig {
    /// Resolves the configured fallback identity.
    pub fn traveler_id(&self) -> Result<TravelerId, ConfigError> {
        TravelerId::new(self.default_traveler.clone())
            .map_err(|e| ConfigError::invalid("identity.default_traveler", e.to_string()))
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        self.traveler_id().map(|_| ())
    }
}
