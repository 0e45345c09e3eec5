//! Geocoder port - best-effort place-name resolution.

use async_trait::async_trait;

use crate::domain::trip::Coordinates;

/// Port for resolving a place name to coordinates.
///
/// Strictly best-effort: implementations return `None` on lookup misses,
/// network failures, or malformed responses. Callers leave coordinates
/// unresolved rather than failing the enclosing operation.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolves a free-form place name, or `None` when it can't.
    async fn resolve(&self, place: &str) -> Option<Coordinates>;
}
