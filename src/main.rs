//! Vivot server binary - configuration, wiring, and serve loop.

use std::sync::Arc;
use std::time::Duration;

use secrecy::ExposeSecret;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use vivot::adapters::ai::{GeminiConfig, GeminiGenerator, MockGenerator};
use vivot::adapters::geocode::{NominatimConfig, NominatimGeocoder, NullGeocoder};
use vivot::adapters::http::{app_router, AppState};
use vivot::adapters::memory::InMemoryStore;
use vivot::application::{BudgetLedger, TripLocks};
use vivot::config::{AppConfig, GeneratorProvider};
use vivot::ports::{Geocoder, ItineraryGenerator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let generator = build_generator(&config)?;
    let geocoder = build_geocoder(&config);

    let store = Arc::new(InMemoryStore::new());
    let locks = Arc::new(TripLocks::new());
    let ledger = Arc::new(BudgetLedger::new(
        store.clone(),
        store.clone(),
        store.clone(),
        locks,
    ));

    let state = AppState {
        trips: store.clone(),
        activities: store.clone(),
        budget_items: store.clone(),
        mood_readings: store.clone(),
        pivot_logs: store.clone(),
        preferences: store.clone(),
        chat_messages: store.clone(),
        pivot_committer: store.clone(),
        generator,
        geocoder,
        ledger,
        pivot_policy: config.pivot.to_policy(),
        default_traveler: config.identity.traveler_id()?,
    };

    let app = app_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "starting server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_generator(
    config: &AppConfig,
) -> Result<Arc<dyn ItineraryGenerator>, Box<dyn std::error::Error>> {
    match config.generator.provider {
        GeneratorProvider::Gemini => {
            let api_key = config
                .generator
                .api_key
                .as_ref()
                .expect("validated: gemini provider requires an api key");
            let gemini = GeminiGenerator::new(
                GeminiConfig::new(api_key.expose_secret().clone())
                    .with_model(config.generator.model.clone())
                    .with_base_url(config.generator.base_url.clone())
                    .with_timeout(Duration::from_secs(config.generator.timeout_secs)),
            )?;
            Ok(Arc::new(gemini))
        }
        GeneratorProvider::Mock => {
            tracing::warn!("generator.provider = mock; generation requests will fail until scripted");
            Ok(Arc::new(MockGenerator::new()))
        }
    }
}

fn build_geocoder(config: &AppConfig) -> Arc<dyn Geocoder> {
    if !config.geocode.enabled {
        return Arc::new(NullGeocoder);
    }
    let nominatim = NominatimGeocoder::new(NominatimConfig {
        base_url: config.geocode.base_url.clone(),
        timeout: Duration::from_secs(config.geocode.timeout_secs),
        ..NominatimConfig::default()
    });
    match nominatim {
        Some(geocoder) => Arc::new(geocoder),
        None => {
            tracing::warn!("geocoder client could not be built; lookups disabled");
            Arc::new(NullGeocoder)
        }
    }
}
