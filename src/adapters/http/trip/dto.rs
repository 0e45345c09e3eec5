//! HTTP DTOs for the trip route group.
//!
//! These types define the JSON boundary between HTTP and the application
//! layer. Responses are camelCase.

use serde::{Deserialize, Serialize};

use crate::domain::trip::{
    Activity, ActivityCategory, ActivityPatch, BudgetItem, Coordinates, EnergyLevel,
    PreferencesPatch, TravelerPreferences, Trip, TripStatus,
};

// ════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════

/// Request to create a trip manually.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
    pub image_url: Option<String>,
    pub coordinates: Option<Coordinates>,
}

/// Request to patch a trip's user-editable fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTripRequest {
    pub destination: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub budget: Option<f64>,
    pub image_url: Option<String>,
}

/// Request to create an activity manually.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityRequest {
    pub trip_id: String,
    pub day: u32,
    pub title: String,
    pub description: Option<String>,
    pub category: ActivityCategory,
    pub time: String,
    pub duration: Option<String>,
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub cost: f64,
    pub order_index: u32,
    pub energy_level_requirement: Option<EnergyLevel>,
    #[serde(default)]
    pub is_shadow_option: bool,
    pub parent_activity_id: Option<String>,
}

/// Request to create a budget item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBudgetItemRequest {
    pub trip_id: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
    pub date: String,
}

/// Request to patch an activity, restricted to the allow-listed fields.
/// Built from a generic JSON patch after out-of-list keys are dropped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActivityRequest {
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

impl From<UpdateActivityRequest> for ActivityPatch {
    fn from(req: UpdateActivityRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            category: req.category,
            time: req.time,
            duration: req.duration,
            location: req.location,
            cost: req.cost,
            completed: req.completed,
            energy_level_requirement: req.energy_level_requirement,
            is_shadow_option: req.is_shadow_option,
            image_url: req.image_url,
        }
    }
}

/// Request to patch preferences.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePreferencesRequest {
    pub budget: Option<crate::domain::trip::BudgetBand>,
    pub pace: Option<crate::domain::trip::Pace>,
    pub interests: Option<Vec<String>>,
    pub dietary: Option<Vec<String>>,
    pub travel_style: Option<crate::domain::trip::TravelStyle>,
}

impl From<UpdatePreferencesRequest> for PreferencesPatch {
    fn from(req: UpdatePreferencesRequest) -> Self {
        Self {
            budget: req.budget,
            pace: req.pace,
            interests: req.interests,
            dietary: req.dietary,
            travel_style: req.travel_style,
        }
    }
}

// ════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════

/// Trip representation returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResponse {
    pub id: String,
    pub traveler_id: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
    pub spent: f64,
    pub status: TripStatus,
    pub image_url: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub created_at: String,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id.to_string(),
            traveler_id: trip.traveler_id.to_string(),
            destination: trip.destination,
            start_date: trip.start_date,
            end_date: trip.end_date,
            budget: trip.budget,
            spent: trip.spent,
            status: trip.status,
            image_url: trip.image_url,
            coordinates: trip.coordinates,
            created_at: trip.created_at.to_rfc3339(),
        }
    }
}

/// Activity representation returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResponse {
    pub id: String,
    pub trip_id: String,
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
    pub parent_activity_id: Option<String>,
    pub created_at: String,
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.id.to_string(),
            trip_id: activity.trip_id.to_string(),
            day: activity.day,
            title: activity.title,
            description: activity.description,
            category: activity.category,
            time: activity.time,
            duration: activity.duration,
            location: activity.location,
            coordinates: activity.coordinates,
            image_url: activity.image_url,
            image_keyword: activity.image_keyword,
            cost: activity.cost,
            order_index: activity.order_index,
            completed: activity.completed,
            energy_level_requirement: activity.energy_level_requirement,
            is_shadow_option: activity.is_shadow_option,
            parent_activity_id: activity.parent_activity_id.map(|id| id.to_string()),
            created_at: activity.created_at.to_rfc3339(),
        }
    }
}

/// Budget item representation returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItemResponse {
    pub id: String,
    pub trip_id: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
    pub date: String,
    pub source_activity_id: Option<String>,
    pub created_at: String,
}

impl From<BudgetItem> for BudgetItemResponse {
    fn from(item: BudgetItem) -> Self {
        Self {
            id: item.id.to_string(),
            trip_id: item.trip_id.to_string(),
            category: item.category,
            amount: item.amount,
            description: item.description,
            date: item.date,
            source_activity_id: item.source_activity_id.map(|id| id.to_string()),
            created_at: item.created_at.to_rfc3339(),
        }
    }
}

/// Preferences representation returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesResponse {
    pub id: String,
    pub traveler_id: String,
    pub budget: crate::domain::trip::BudgetBand,
    pub pace: crate::domain::trip::Pace,
    pub interests: Vec<String>,
    pub dietary: Vec<String>,
    pub travel_style: crate::domain::trip::TravelStyle,
    pub updated_at: String,
}

impl From<TravelerPreferences> for PreferencesResponse {
    fn from(prefs: TravelerPreferences) -> Self {
        Self {
            id: prefs.id.to_string(),
            traveler_id: prefs.traveler_id.to_string(),
            budget: prefs.budget,
            pace: prefs.pace,
            interests: prefs.interests,
            dietary: prefs.dietary,
            travel_style: prefs.travel_style,
            updated_at: prefs.updated_at.to_rfc3339(),
        }
    }
}
