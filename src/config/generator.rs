//! Generator configuration.

use secrecy::Secret;
use serde::Deserialize;

use super::ConfigError;

/// Which generator implementation to wire up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorProvider {
    /// Gemini-style HTTP API.
    Gemini,
    /// Scripted mock; useful for local development without a key.
    Mock,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

/// External generator settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "GeneratorConfig::default_provider")]
    pub provider: GeneratorProvider,
    /// API key; required for the Gemini provider.
    pub api_key: Option<Secret<String>>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl GeneratorConfig {
    fn default_provider() -> GeneratorProvider {
        GeneratorProvider::Mock
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.provider == GeneratorProvider::Gemini && self.api_key.is_none() {
            return Err(ConfigError::invalid(
                "generator.api_key",
                "required when generator.provider = gemini",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid("generator.timeout_secs", "must be > 0"));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            provider: Self::default_provider(),
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_provider_is_mock_and_valid() {
        let config = GeneratorConfig::default();
        assert_eq!(config.provider, GeneratorProvider::Mock);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn gemini_without_key_fails_validation() {
        let config = GeneratorConfig {
            provider: GeneratorProvider::Gemini,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
