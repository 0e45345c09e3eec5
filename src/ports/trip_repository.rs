//! Trip repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, TravelerId, TripId};
use crate::domain::trip::{Coordinates, NewTrip, Trip, TripStatus};

/// Repository port for trip persistence.
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Creates a trip and returns the stored entity.
    async fn create(&self, new: NewTrip) -> Result<Trip, DomainError>;

    /// Finds a trip by id. Returns `None` if absent.
    async fn find_by_id(&self, id: TripId) -> Result<Option<Trip>, DomainError>;

    /// Lists a traveler's trips, newest first.
    async fn list_by_traveler(&self, traveler_id: &TravelerId) -> Result<Vec<Trip>, DomainError>;

    /// Updates user-editable trip fields (destination, dates, budget,
    /// image). Fails with `TripNotFound` if absent.
    async fn update(
        &self,
        id: TripId,
        destination: Option<String>,
        start_date: Option<String>,
        end_date: Option<String>,
        budget: Option<f64>,
        image_url: Option<String>,
    ) -> Result<Trip, DomainError>;

    /// Overwrites the derived spend figure. Only the budget ledger calls
    /// this. Fails with `TripNotFound` if absent.
    async fn set_spent(&self, id: TripId, spent: f64) -> Result<Trip, DomainError>;

    /// Sets the trip status. Fails with `TripNotFound` if absent.
    async fn set_status(&self, id: TripId, status: TripStatus) -> Result<Trip, DomainError>;

    /// Backfills resolved coordinates. Fails with `TripNotFound` if absent.
    async fn set_coordinates(
        &self,
        id: TripId,
        coordinates: Coordinates,
    ) -> Result<Trip, DomainError>;
}
