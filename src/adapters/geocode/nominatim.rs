//! Nominatim geocoder - search endpoint lookup, strictly best-effort.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::trip::Coordinates;
use crate::ports::Geocoder;

/// Configuration for the Nominatim geocoder.
#[derive(Debug, Clone)]
pub struct NominatimConfig {
    /// Base URL of the Nominatim instance.
    pub base_url: String,
    /// User agent sent with lookups (required by public instances).
    pub user_agent: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: concat!("vivot/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Nominatim-backed implementation of the geocoder port. Every failure
/// mode (network, non-2xx, empty result, malformed body) resolves to
/// `None`; a missing coordinate never fails an enclosing operation.
pub struct NominatimGeocoder {
    config: NominatimConfig,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

impl NominatimGeocoder {
    /// Creates a geocoder; returns `None` if the HTTP client cannot be
    /// built (the caller falls back to no geocoding).
    pub fn new(config: NominatimConfig) -> Option<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .ok()?;
        Some(Self { config, client })
    }

    async fn lookup(&self, place: &str) -> Option<Coordinates> {
        let url = format!("{}/search", self.config.base_url);
        let response = self
            .client
            .get(url)
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .ok()?;

        if !response.status().is_success() {
            return None;
        }

        let hits: Vec<SearchHit> = response.json().await.ok()?;
        let hit = hits.into_iter().next()?;
        let pair = Coordinates::new(hit.lat.parse().ok()?, hit.lon.parse().ok()?);
        (pair.is_valid() && !pair.is_unresolved()).then_some(pair)
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn resolve(&self, place: &str) -> Option<Coordinates> {
        if place.trim().is_empty() {
            return None;
        }
        let resolved = self.lookup(place).await;
        if resolved.is_none() {
            tracing::debug!(%place, "geocode lookup missed");
        }
        resolved
    }
}
