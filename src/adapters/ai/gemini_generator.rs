//! Gemini generator - HTTP adapter for a Gemini-style generateContent API.
//!
//! JSON-producing calls request `application/json` output and run the
//! result through the payload validators; the adaptation call is plain
//! text and is returned as-is.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::trip::{Activity, TravelerPreferences};
use crate::ports::{
    AdaptationContext, CareModePlan, GeneratedItinerary, GeneratorError, ItineraryGenerator,
    PivotContext, PivotProposalPayload,
};

use super::payload;
use super::prompts;

/// Configuration for the Gemini generator.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    api_key: Secret<String>,
    /// Model to use (e.g. "gemini-2.5-flash").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini-backed implementation of the generator port.
pub struct GeminiGenerator {
    config: GeminiConfig,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

impl GeminiGenerator {
    /// Creates a generator with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, GeneratorError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GeneratorError::InvalidRequest(e.to_string()))?;
        Ok(Self { config, client })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// One generateContent call; returns the first candidate's text.
    async fn generate(
        &self,
        system_instruction: Option<String>,
        prompt: String,
        json_mode: bool,
    ) -> Result<String, GeneratorError> {
        let request = GeminiRequest {
            system_instruction: system_instruction.map(|text| GeminiContent {
                parts: vec![GeminiPart { text }],
            }),
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
            generation_config: json_mode.then_some(GenerationConfig {
                response_mime_type: "application/json",
            }),
        };

        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", self.config.api_key())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    GeneratorError::network(format!("Connection failed: {}", e))
                } else {
                    GeneratorError::network(e.to_string())
                }
            })?;

        let response = self.handle_status(response).await?;

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::parse(e.to_string()))?;

        body.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| GeneratorError::parse("empty candidate list"))
    }

    async fn handle_status(&self, response: Response) -> Result<Response, GeneratorError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        match status.as_u16() {
            401 | 403 => Err(GeneratorError::AuthenticationFailed),
            429 => Err(GeneratorError::RateLimited {
                retry_after_secs: 60,
            }),
            400 => Err(GeneratorError::InvalidRequest(error_body)),
            500..=599 => Err(GeneratorError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(GeneratorError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }
}

#[async_trait]
impl ItineraryGenerator for GeminiGenerator {
    async fn generate_itinerary(
        &self,
        user_text: &str,
        preferences: Option<&TravelerPreferences>,
    ) -> Result<GeneratedItinerary, GeneratorError> {
        let system = prompts::itinerary_system_prompt(preferences);
        let text = self
            .generate(Some(system), user_text.to_string(), true)
            .await?;
        payload::parse_itinerary(&text)
    }

    async fn pivot_proposal(
        &self,
        activity: &Activity,
        context: &PivotContext,
    ) -> Result<PivotProposalPayload, GeneratorError> {
        let prompt = prompts::pivot_prompt(activity, context);
        let text = self.generate(None, prompt, true).await?;
        payload::parse_pivot_proposal(&text)
    }

    async fn adapt_itinerary(
        &self,
        activities_summary: &str,
        context: &AdaptationContext,
    ) -> Result<String, GeneratorError> {
        let prompt = prompts::adaptation_prompt(activities_summary, context);
        self.generate(None, prompt, false).await
    }

    async fn care_plan(
        &self,
        condition: &str,
        destination: &str,
        current_activity: Option<&str>,
    ) -> Result<CareModePlan, GeneratorError> {
        let prompt = prompts::care_prompt(condition, destination, current_activity);
        let text = self.generate(None, prompt, true).await?;
        payload::parse_care_plan(&text)
    }
}
