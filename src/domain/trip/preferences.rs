//! Traveler preferences - stored taste profile used to personalize
//! generated itineraries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PreferencesId, Timestamp, TravelerId};

/// Budget band a traveler is comfortable with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetBand {
    Low,
    Medium,
    High,
    Luxury,
}

/// Preferred pace of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pace {
    Relaxed,
    Moderate,
    FastPaced,
}

/// Party composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    Solo,
    Couple,
    Family,
    Group,
}

/// Stored preference profile for one traveler.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelerPreferences {
    pub id: PreferencesId,
    pub traveler_id: TravelerId,
    pub budget: BudgetBand,
    pub pace: Pace,
    pub interests: Vec<String>,
    pub dietary: Vec<String>,
    pub travel_style: TravelStyle,
    pub updated_at: Timestamp,
}

/// Data required to create a preferences record.
#[derive(Debug, Clone)]
pub struct NewPreferences {
    pub traveler_id: TravelerId,
    pub budget: BudgetBand,
    pub pace: Pace,
    pub interests: Vec<String>,
    pub dietary: Vec<String>,
    pub travel_style: TravelStyle,
}

/// Partial update to a preferences record.
#[derive(Debug, Clone, Default)]
pub struct PreferencesPatch {
    pub budget: Option<BudgetBand>,
    pub pace: Option<Pace>,
    pub interests: Option<Vec<String>>,
    pub dietary: Option<Vec<String>>,
    pub travel_style: Option<TravelStyle>,
}

impl TravelerPreferences {
    /// Creates a preferences record.
    pub fn create(new: NewPreferences) -> Self {
        Self {
            id: PreferencesId::new(),
            traveler_id: new.traveler_id,
            budget: new.budget,
            pace: new.pace,
            interests: new.interests,
            dietary: new.dietary,
            travel_style: new.travel_style,
            updated_at: Timestamp::now(),
        }
    }

    /// Sensible defaults for a traveler seen for the first time.
    pub fn defaults_for(traveler_id: TravelerId) -> Self {
        Self::create(NewPreferences {
            traveler_id,
            budget: BudgetBand::Medium,
            pace: Pace::Moderate,
            interests: vec!["food".to_string(), "culture".to_string()],
            dietary: vec!["none".to_string()],
            travel_style: TravelStyle::Solo,
        })
    }

    /// Applies a partial update and bumps `updated_at`.
    pub fn apply_patch(&mut self, patch: PreferencesPatch) {
        if let Some(budget) = patch.budget {
            self.budget = budget;
        }
        if let Some(pace) = patch.pace {
            self.pace = pace;
        }
        if let Some(interests) = patch.interests {
            self.interests = interests;
        }
        if let Some(dietary) = patch.dietary {
            self.dietary = dietary;
        }
        if let Some(style) = patch.travel_style {
            self.travel_style = style;
        }
        self.updated_at = Timestamp::now();
    }
}
