//! Trip module - the trip aggregate and everything it owns.
//!
//! A Trip exclusively owns its Activities (including shadow variants),
//! BudgetItems, MoodReadings, and PivotLogs. The only cross-entity
//! reference is the intra-trip shadow back-reference
//! (`Activity::parent_activity_id`).

mod activity;
mod budget;
mod chat;
mod coordinates;
mod energy;
mod mood;
mod pivot_log;
mod preferences;
#[allow(clippy::module_inception)]
mod trip;

pub use activity::{Activity, ActivityCategory, ActivityPatch, NewActivity};
pub use budget::{BudgetItem, NewBudgetItem};
pub use chat::{ChatMessage, ChatRole};
pub use coordinates::Coordinates;
pub use energy::EnergyLevel;
pub use mood::MoodReading;
pub use pivot_log::{NewPivotLog, PivotLog, PivotTrigger};
pub use preferences::{
    BudgetBand, NewPreferences, Pace, PreferencesPatch, TravelStyle, TravelerPreferences,
};
pub use trip::{NewTrip, Trip, TripStatus};
