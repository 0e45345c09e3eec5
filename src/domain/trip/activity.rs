//! Activity entity - one itinerary entry, main or shadow.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ActivityId, Timestamp, TripId, ValidationError};

use super::{Coordinates, EnergyLevel};

/// Category of an itinerary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Activity,
    Restaurant,
    Accommodation,
    Transport,
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActivityCategory::Activity => "activity",
            ActivityCategory::Restaurant => "restaurant",
            ActivityCategory::Accommodation => "accommodation",
            ActivityCategory::Transport => "transport",
        };
        write!(f, "{}", s)
    }
}

/// One itinerary entry belonging to exactly one trip.
///
/// A shadow option (`is_shadow_option = true`) is a pre-generated
/// low-energy alternative; it must reference its main activity through
/// `parent_activity_id` (non-owning, intra-trip). Main-itinerary queries
/// exclude shadows.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: ActivityId,
    pub trip_id: TripId,
    pub day: u32,
    pub title: String,
    pub description: Option<String>,
    pub category: ActivityCategory,
    pub time: String,
    pub duration: Option<String>,
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub image_url: Option<String>,
    pub image_keyword: Option<String>,
    pub cost: f64,
    pub order_index: u32,
    pub completed: bool,
    pub energy_level_requirement: EnergyLevel,
    pub is_shadow_option: bool,
    pub parent_activity_id: Option<ActivityId>,
    pub created_at: Timestamp,
}

/// Data required to create an activity.
#[derive(Debug, Clone)]
pub struct NewActivity {
    pub trip_id: TripId,
    pub day: u32,
    pub title: String,
    pub description: Option<String>,
    pub category: ActivityCategory,
    pub time: String,
    pub duration: Option<String>,
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub image_url: Option<String>,
    pub image_keyword: Option<String>,
    pub cost: f64,
    pub order_index: u32,
    pub energy_level_requirement: EnergyLevel,
    pub is_shadow_option: bool,
    pub parent_activity_id: Option<ActivityId>,
}

impl Activity {
    /// Creates an activity, not yet completed.
    pub fn create(new: NewActivity) -> Result<Self, ValidationError> {
        if new.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if new.day == 0 {
            return Err(ValidationError::out_of_range("day", 1, i64::MAX, 0));
        }
        if new.cost < 0.0 {
            return Err(ValidationError::invalid_format("cost", "must be >= 0"));
        }
        if new.is_shadow_option && new.parent_activity_id.is_none() {
            return Err(ValidationError::invalid_format(
                "parent_activity_id",
                "shadow option requires a parent activity",
            ));
        }

        Ok(Self {
            id: ActivityId::new(),
            trip_id: new.trip_id,
            day: new.day,
            title: new.title,
            description: new.description,
            category: new.category,
            time: new.time,
            duration: new.duration,
            location: new.location,
            coordinates: new.coordinates,
            image_url: new.image_url,
            image_keyword: new.image_keyword,
            cost: new.cost,
            order_index: new.order_index,
            completed: false,
            energy_level_requirement: new.energy_level_requirement,
            is_shadow_option: new.is_shadow_option,
            parent_activity_id: new.parent_activity_id,
            created_at: Timestamp::now(),
        })
    }

    /// Applies a sanitized patch. Identity fields (`id`, `trip_id`,
    /// `parent_activity_id`) have no representation in the patch and
    /// cannot be touched.
    pub fn apply_patch(&mut self, patch: &ActivityPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(time) = &patch.time {
            self.time = time.clone();
        }
        if let Some(duration) = &patch.duration {
            self.duration = Some(duration.clone());
        }
        if let Some(location) = &patch.location {
            self.location = location.clone();
        }
        if let Some(cost) = patch.cost {
            self.cost = cost;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(energy) = patch.energy_level_requirement {
            self.energy_level_requirement = energy;
        }
        if let Some(is_shadow) = patch.is_shadow_option {
            self.is_shadow_option = is_shadow;
        }
        if let Some(image_url) = &patch.image_url {
            self.image_url = Some(image_url.clone());
        }
    }

    /// True when the activity's coordinates still need a geocoder lookup.
    pub fn needs_geocoding(&self) -> bool {
        match self.coordinates {
            None => true,
            Some(c) => c.is_unresolved(),
        }
    }

    /// True when this shadow belongs to the given main activity.
    pub fn shadows(&self, main_id: ActivityId) -> bool {
        self.is_shadow_option && self.parent_activity_id == Some(main_id)
    }
}

/// Patch restricted to the activity fields external callers may change.
///
/// This is the allow-list boundary: a generic JSON patch is narrowed to
/// this shape before reaching the store, so identity fields cannot be
/// corrupted through an update.
#[derive(Debug, Clone, Default)]
pub struct ActivityPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<ActivityCategory>,
    pub time: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub cost: Option<f64>,
    pub completed: Option<bool>,
    pub energy_level_requirement: Option<EnergyLevel>,
    pub is_shadow_option: Option<bool>,
    pub image_url: Option<String>,
}

impl ActivityPatch {
    /// Patch that only flips the completion flag.
    pub fn completion(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.time.is_none()
            && self.duration.is_none()
            && self.location.is_none()
            && self.cost.is_none()
            && self.completed.is_none()
            && self.energy_level_requirement.is_none()
            && self.is_shadow_option.is_none()
            && self.image_url.is_none()
    }
}
