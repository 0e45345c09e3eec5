//! Geocoding adapters - best-effort place-name resolution.

mod nominatim;

pub use nominatim::{NominatimConfig, NominatimGeocoder};

use async_trait::async_trait;

use crate::domain::trip::Coordinates;
use crate::ports::Geocoder;

/// Geocoder that never resolves anything. Used when lookups are disabled
/// and in tests; callers simply keep coordinates unresolved.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullGeocoder;

#[async_trait]
impl Geocoder for NullGeocoder {
    async fn resolve(&self, _place: &str) -> Option<Coordinates> {
        None
    }
}
