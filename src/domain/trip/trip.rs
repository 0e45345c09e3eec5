//! Trip entity - the aggregate root for a planned journey.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, TravelerId, TripId, ValidationError};

use super::Coordinates;

/// Lifecycle status of a trip. Externally managed; the core never
/// transitions it on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Planning,
    Active,
    Completed,
}

/// A planned trip. Owns its activities, budget items, mood readings, and
/// pivot logs (scoped by `id`).
///
/// `spent` is derived: only the budget ledger writes it, and after every
/// cost-bearing mutation it equals the sum of the trip's budget item
/// amounts, clamped at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: TripId,
    pub traveler_id: TravelerId,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
    pub spent: f64,
    pub status: TripStatus,
    pub image_url: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub created_at: Timestamp,
}

/// Data required to create a trip.
#[derive(Debug, Clone)]
pub struct NewTrip {
    pub traveler_id: TravelerId,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
    pub image_url: Option<String>,
    pub coordinates: Option<Coordinates>,
}

impl Trip {
    /// Creates a trip in the Planning state with nothing spent.
    pub fn create(new: NewTrip) -> Result<Self, ValidationError> {
        if new.destination.trim().is_empty() {
            return Err(ValidationError::empty_field("destination"));
        }
        if new.budget < 0.0 {
            return Err(ValidationError::invalid_format("budget", "must be >= 0"));
        }
        if new.start_date.trim().is_empty() {
            return Err(ValidationError::empty_field("start_date"));
        }
        if new.end_date.trim().is_empty() {
            return Err(ValidationError::empty_field("end_date"));
        }

        Ok(Self {
            id: TripId::new(),
            traveler_id: new.traveler_id,
            destination: new.destination,
            start_date: new.start_date,
            end_date: new.end_date,
            budget: new.budget,
            spent: 0.0,
            status: TripStatus::Planning,
            image_url: new.image_url,
            coordinates: new.coordinates,
            created_at: Timestamp::now(),
        })
    }

    /// Remaining budget, clamped at zero.
    pub fn budget_remaining(&self) -> f64 {
        (self.budget - self.spent).max(0.0)
    }

    /// True when the trip's own coordinates still need a geocoder lookup.
    pub fn needs_geocoding(&self) -> bool {
        match self.coordinates {
            None => true,
            Some(c) => c.is_unresolved(),
        }
    }
}
