//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is read with the `VIVOT_`
//! prefix; nested values use `__` as the separator, e.g.
//! `VIVOT_SERVER__PORT=8080` or `VIVOT_GENERATOR__API_KEY=...`.
//!
//! # Example
//!
//! ```no_run
//! use vivot::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod error;
mod generator;
mod geocode;
mod identity;
mod pivot;
mod server;

pub use error::ConfigError;
pub use generator::{GeneratorConfig, GeneratorProvider};
pub use geocode::GeocodeConfig;
pub use identity::IdentityConfig;
pub use pivot::PivotConfig;
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port).
    #[serde(default)]
    pub server: ServerConfig,

    /// Generator configuration (provider, key, model).
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Geocoder configuration.
    #[serde(default)]
    pub geocode: GeocodeConfig,

    /// Pivot decision policy.
    #[serde(default)]
    pub pivot: PivotConfig,

    /// Fallback identity for requests without a traveler header.
    #[serde(default)]
    pub identity: IdentityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            generator: GeneratorConfig::default(),
            geocode: GeocodeConfig::default(),
            pivot: PivotConfig::default(),
            identity: IdentityConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Reads a `.env` file first when present (development convenience),
    /// then environment variables with the `VIVOT` prefix.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("VIVOT").separator("__"))
            .build()
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| ConfigError::Load(e.to_string()))
    }

    /// Validates cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.generator.validate()?;
        self.pivot.validate()?;
        self.identity.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }
}
