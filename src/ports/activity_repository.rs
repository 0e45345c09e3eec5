//! Activity repository port.

use async_trait::async_trait;

use crate::domain::foundation::{ActivityId, DomainError, TripId};
use crate::domain::trip::{Activity, ActivityPatch, NewActivity};

/// Repository port for itinerary activities (main and shadow rows).
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Creates one activity and returns the stored entity.
    async fn create(&self, new: NewActivity) -> Result<Activity, DomainError>;

    /// Inserts a pre-built batch all-or-nothing. Used by trip generation
    /// so a trip never persists with a truncated itinerary.
    async fn insert_batch(&self, activities: Vec<Activity>) -> Result<(), DomainError>;

    /// Finds an activity by id. Returns `None` if absent.
    async fn find_by_id(&self, id: ActivityId) -> Result<Option<Activity>, DomainError>;

    /// Lists a trip's main itinerary: shadows excluded, ordered by
    /// (day asc, order_index asc).
    async fn list_by_trip(&self, trip_id: TripId) -> Result<Vec<Activity>, DomainError>;

    /// Lists only a trip's shadow options.
    async fn list_shadows(&self, trip_id: TripId) -> Result<Vec<Activity>, DomainError>;

    /// Applies an allow-listed patch. Fails with `ActivityNotFound` if
    /// absent.
    async fn update(&self, id: ActivityId, patch: ActivityPatch) -> Result<Activity, DomainError>;

    /// Backfills resolved coordinates without touching anything else.
    async fn set_coordinates(
        &self,
        id: ActivityId,
        coordinates: crate::domain::trip::Coordinates,
    ) -> Result<Activity, DomainError>;

    /// Deletes an activity. Fails with `ActivityNotFound` if absent.
    async fn delete(&self, id: ActivityId) -> Result<(), DomainError>;
}
