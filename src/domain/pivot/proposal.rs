//! Proposal and swap value objects exchanged by the pivot engine.

use serde::{Deserialize, Serialize};

use crate::domain::trip::{Activity, ActivityCategory, Coordinates, EnergyLevel};

/// The replacement activity offered by a proposal. Either a stored shadow
/// option projected into this shape, or a freshly generated suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedActivity {
    pub title: String,
    pub description: Option<String>,
    pub category: ActivityCategory,
    pub location: String,
    pub cost: f64,
    pub duration: Option<String>,
    pub coordinates: Option<Coordinates>,
}

impl ProposedActivity {
    /// Projects a stored shadow activity into proposal shape.
    pub fn from_shadow(shadow: &Activity) -> Self {
        Self {
            title: shadow.title.clone(),
            description: shadow.description.clone(),
            category: shadow.category,
            location: shadow.location.clone(),
            cost: shadow.cost,
            duration: shadow.duration.clone(),
            coordinates: shadow.coordinates,
        }
    }
}

/// A computed pivot proposal, returned to the caller and not persisted.
/// An unconfirmed proposal has no effect.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotProposal {
    pub proposal: String,
    pub new_activity: ProposedActivity,
    pub is_pre_planned: bool,
}

impl PivotProposal {
    /// Wraps a stored shadow option; no generator involved.
    pub fn pre_planned(replaced_title: &str, shadow: &Activity) -> Self {
        Self {
            proposal: format!(
                "{} is already on your plan as a gentler alternative to {}.",
                shadow.title, replaced_title
            ),
            new_activity: ProposedActivity::from_shadow(shadow),
            is_pre_planned: true,
        }
    }

    /// Wraps a freshly generated suggestion.
    pub fn generated(proposal: String, new_activity: ProposedActivity) -> Self {
        Self {
            proposal,
            new_activity,
            is_pre_planned: false,
        }
    }
}

/// The field set a confirmed pivot writes onto the replaced activity.
/// The record keeps its identity; the energy requirement drops to low and
/// the shadow flag clears.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotSwap {
    pub title: String,
    pub description: Option<String>,
    pub category: ActivityCategory,
    pub location: String,
    pub cost: f64,
    pub duration: Option<String>,
}

impl PivotSwap {
    /// Builds the swap from confirmed replacement data.
    pub fn from_proposed(proposed: &ProposedActivity) -> Self {
        Self {
            title: proposed.title.clone(),
            description: proposed.description.clone(),
            category: proposed.category,
            location: proposed.location.clone(),
            cost: proposed.cost,
            duration: proposed.duration.clone(),
        }
    }

    /// Applies the swap in place.
    pub fn apply_to(&self, activity: &mut Activity) {
        activity.title = self.title.clone();
        activity.description = self.description.clone();
        activity.category = self.category;
        activity.location = self.location.clone();
        activity.cost = self.cost;
        activity.duration = self.duration.clone();
        activity.energy_level_requirement = EnergyLevel::Low;
        activity.is_shadow_option = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ActivityId, TripId};
    use crate::domain::trip::NewActivity;

    fn main_activity(trip_id: TripId) -> Activity {
        Activity::create(NewActivity {
            trip_id,
            day: 1,
            title: "Mountain Hike".to_string(),
            description: Some("Full-day trek".to_string()),
            category: ActivityCategory::Activity,
            time: "09:00".to_string(),
            duration: Some("6 hours".to_string()),
            location: "Alps".to_string(),
            coordinates: None,
            image_url: None,
            image_keyword: None,
            cost: 80.0,
            order_index: 0,
            energy_level_requirement: EnergyLevel::High,
            is_shadow_option: false,
            parent_activity_id: None,
        })
        .unwrap()
    }

    fn shadow_of(main: &Activity) -> Activity {
        Activity::create(NewActivity {
            trip_id: main.trip_id,
            day: main.day,
            title: "Thermal Spa".to_string(),
            description: Some("Soak and rest".to_string()),
            category: ActivityCategory::Activity,
            time: main.time.clone(),
            duration: Some("2 hours".to_string()),
            location: "Valley town".to_string(),
            coordinates: None,
            image_url: None,
            image_keyword: None,
            cost: 30.0,
            order_index: main.order_index,
            energy_level_requirement: EnergyLevel::Low,
            is_shadow_option: true,
            parent_activity_id: Some(main.id),
        })
        .unwrap()
    }

    #[test]
    fn pre_planned_proposal_wraps_the_shadow() {
        let main = main_activity(TripId::new());
        let shadow = shadow_of(&main);
        let proposal = PivotProposal::pre_planned(&main.title, &shadow);

        assert!(proposal.is_pre_planned);
        assert_eq!(proposal.new_activity.title, "Thermal Spa");
        assert!(proposal.proposal.contains("Thermal Spa"));
        assert!(proposal.proposal.contains("Mountain Hike"));
    }

    #[test]
    fn swap_keeps_identity_and_lowers_energy() {
        let mut main = main_activity(TripId::new());
        let original_id = main.id;
        let shadow = shadow_of(&main);

        let swap = PivotSwap::from_proposed(&ProposedActivity::from_shadow(&shadow));
        swap.apply_to(&mut main);

        assert_eq!(main.id, original_id);
        assert_eq!(main.title, "Thermal Spa");
        assert_eq!(main.cost, 30.0);
        assert_eq!(main.energy_level_requirement, EnergyLevel::Low);
        assert!(!main.is_shadow_option);
    }

    #[test]
    fn swap_applied_twice_is_idempotent_on_fields() {
        let mut main = main_activity(TripId::new());
        let shadow = shadow_of(&main);
        let swap = PivotSwap::from_proposed(&ProposedActivity::from_shadow(&shadow));

        swap.apply_to(&mut main);
        let after_first = main.clone();
        swap.apply_to(&mut main);

        assert_eq!(main, after_first);
    }

    #[test]
    fn swap_does_not_touch_parent_reference() {
        let trip_id = TripId::new();
        let mut main = main_activity(trip_id);
        let parent = ActivityId::new();
        main.parent_activity_id = Some(parent);

        let shadow = shadow_of(&main);
        PivotSwap::from_proposed(&ProposedActivity::from_shadow(&shadow)).apply_to(&mut main);

        assert_eq!(main.parent_activity_id, Some(parent));
    }
}
