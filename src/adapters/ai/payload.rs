//! Strict validation of generator output.
//!
//! The model returns loosely-typed JSON. Everything is deserialized into
//! permissive raw shapes first, then coerced into the port types:
//! trip-level defects reject the whole payload, while an individually
//! malformed activity row is dropped with a warning so one bad row cannot
//! sink an otherwise good itinerary.

use serde::Deserialize;

use crate::domain::pivot::ProposedActivity;
use crate::domain::trip::{ActivityCategory, Coordinates};
use crate::ports::{
    CareModePlan, CarePlanStep, GeneratedActivity, GeneratedItinerary, GeneratedShadow,
    GeneratedTrip, GeneratorError, GroupAdjustment, PivotProposalPayload,
};

// ────────────────────────────────────────────────────────────────────
// Raw shapes (exactly what the model is asked to emit)
// ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RawCoordinates {
    lat: Option<f64>,
    lng: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItinerary {
    response: Option<String>,
    trip: Option<RawTrip>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTrip {
    destination: Option<String>,
    coordinates: Option<RawCoordinates>,
    start_date: Option<String>,
    end_date: Option<String>,
    budget: Option<f64>,
    #[serde(default)]
    activities: Vec<RawActivity>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawActivity {
    day: Option<u32>,
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    time: Option<String>,
    duration: Option<String>,
    location: Option<String>,
    coordinates: Option<RawCoordinates>,
    image_keyword: Option<String>,
    cost: Option<f64>,
    order_index: Option<u32>,
    shadow_option: Option<RawShadow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawShadow {
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    time: Option<String>,
    duration: Option<String>,
    location: Option<String>,
    coordinates: Option<RawCoordinates>,
    cost: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPivot {
    proposal: Option<String>,
    new_activity: Option<RawProposedActivity>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProposedActivity {
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    location: Option<String>,
    cost: Option<f64>,
    duration: Option<String>,
    coordinates: Option<RawCoordinates>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCarePlan {
    condition: Option<String>,
    #[serde(default)]
    personal_plan: Vec<RawCareStep>,
    #[serde(default)]
    group_plan: Vec<RawGroupAdjustment>,
    recheck_in_minutes: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCareStep {
    title: Option<String>,
    description: Option<String>,
    recommended_duration: Option<String>,
    place_type: Option<String>,
    image_keyword: Option<String>,
    coordinates: Option<RawCoordinates>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGroupAdjustment {
    title: Option<String>,
    description: Option<String>,
    recommended_adjustment: Option<String>,
    reasoning: Option<String>,
    image_keyword: Option<String>,
}

// ────────────────────────────────────────────────────────────────────
// Coercion helpers
// ────────────────────────────────────────────────────────────────────

fn coordinates(raw: Option<RawCoordinates>) -> Option<Coordinates> {
    let raw = raw?;
    let (lat, lng) = (raw.lat?, raw.lng?);
    if !lat.is_finite() || !lng.is_finite() {
        return None;
    }
    let pair = Coordinates::new(lat, lng);
    pair.is_valid().then_some(pair)
}

fn category(raw: &str) -> Option<ActivityCategory> {
    match raw {
        "activity" => Some(ActivityCategory::Activity),
        "restaurant" => Some(ActivityCategory::Restaurant),
        "accommodation" => Some(ActivityCategory::Accommodation),
        "transport" => Some(ActivityCategory::Transport),
        _ => None,
    }
}

/// Lenient category mapping for proposal payloads, where the model may
/// answer "relaxation" and similar.
fn coerce_category(raw: Option<&str>) -> ActivityCategory {
    raw.and_then(category).unwrap_or(ActivityCategory::Activity)
}

fn required_string(value: Option<String>, field: &str) -> Result<String, GeneratorError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(GeneratorError::parse(format!("missing field '{field}'"))),
    }
}

// ────────────────────────────────────────────────────────────────────
// Public parsers
// ────────────────────────────────────────────────────────────────────

/// Parses a one-shot itinerary response.
pub fn parse_itinerary(text: &str) -> Result<GeneratedItinerary, GeneratorError> {
    let raw: RawItinerary =
        serde_json::from_str(text).map_err(|e| GeneratorError::parse(e.to_string()))?;

    let response = required_string(raw.response, "response")?;
    let trip = raw.trip.map(parse_trip).transpose()?;

    Ok(GeneratedItinerary { response, trip })
}

fn parse_trip(raw: RawTrip) -> Result<GeneratedTrip, GeneratorError> {
    let destination = required_string(raw.destination, "trip.destination")?;
    let start_date = required_string(raw.start_date, "trip.startDate")?;
    let end_date = required_string(raw.end_date, "trip.endDate")?;
    let budget = match raw.budget {
        Some(b) if b.is_finite() && b >= 0.0 => b,
        _ => return Err(GeneratorError::parse("missing or invalid 'trip.budget'")),
    };

    let mut activities = Vec::with_capacity(raw.activities.len());
    for (index, raw_activity) in raw.activities.into_iter().enumerate() {
        match parse_activity(raw_activity, index) {
            Some(activity) => activities.push(activity),
            None => {
                tracing::warn!(index, "dropping malformed generated activity row");
            }
        }
    }

    Ok(GeneratedTrip {
        destination,
        coordinates: coordinates(raw.coordinates),
        start_date,
        end_date,
        budget,
        activities,
    })
}

fn parse_activity(raw: RawActivity, index: usize) -> Option<GeneratedActivity> {
    let title = raw.title.filter(|t| !t.trim().is_empty())?;
    let day = raw.day.filter(|d| *d >= 1)?;
    let category = category(raw.category.as_deref()?)?;
    let location = raw.location.filter(|l| !l.trim().is_empty())?;
    let cost = raw.cost.unwrap_or(0.0);
    if !cost.is_finite() || cost < 0.0 {
        return None;
    }

    let shadow = raw.shadow_option.and_then(|s| {
        let parsed = parse_shadow(s);
        if parsed.is_none() {
            tracing::warn!(%title, "dropping malformed shadow option");
        }
        parsed
    });

    Some(GeneratedActivity {
        day,
        title,
        description: raw.description,
        category,
        time: raw.time.unwrap_or_default(),
        duration: raw.duration,
        location,
        coordinates: coordinates(raw.coordinates),
        image_keyword: raw.image_keyword,
        cost,
        order_index: raw.order_index.unwrap_or(index as u32),
        shadow_option: shadow,
    })
}

fn parse_shadow(raw: RawShadow) -> Option<GeneratedShadow> {
    let title = raw.title.filter(|t| !t.trim().is_empty())?;
    let location = raw.location.filter(|l| !l.trim().is_empty())?;
    let cost = raw.cost.unwrap_or(0.0);
    if !cost.is_finite() || cost < 0.0 {
        return None;
    }

    Some(GeneratedShadow {
        title,
        description: raw.description,
        category: coerce_category(raw.category.as_deref()),
        time: raw.time.unwrap_or_default(),
        duration: raw.duration,
        location,
        coordinates: coordinates(raw.coordinates),
        cost,
    })
}

/// Parses a pivot proposal response.
pub fn parse_pivot_proposal(text: &str) -> Result<PivotProposalPayload, GeneratorError> {
    let raw: RawPivot =
        serde_json::from_str(text).map_err(|e| GeneratorError::parse(e.to_string()))?;

    let proposal = required_string(raw.proposal, "proposal")?;
    let raw_activity = raw
        .new_activity
        .ok_or_else(|| GeneratorError::parse("missing field 'newActivity'"))?;

    let title = required_string(raw_activity.title, "newActivity.title")?;
    let location = required_string(raw_activity.location, "newActivity.location")?;
    let cost = raw_activity.cost.unwrap_or(0.0);
    if !cost.is_finite() || cost < 0.0 {
        return Err(GeneratorError::parse("invalid 'newActivity.cost'"));
    }

    Ok(PivotProposalPayload {
        proposal,
        new_activity: ProposedActivity {
            title,
            description: raw_activity.description,
            category: coerce_category(raw_activity.category.as_deref()),
            location,
            cost,
            duration: raw_activity.duration,
            coordinates: coordinates(raw_activity.coordinates),
        },
    })
}

/// Parses a Care Mode plan response.
pub fn parse_care_plan(text: &str) -> Result<CareModePlan, GeneratorError> {
    let raw: RawCarePlan =
        serde_json::from_str(text).map_err(|e| GeneratorError::parse(e.to_string()))?;

    let condition = required_string(raw.condition, "condition")?;
    if raw.personal_plan.is_empty() {
        return Err(GeneratorError::parse("empty 'personalPlan'"));
    }

    let personal_plan = raw
        .personal_plan
        .into_iter()
        .filter_map(|step| {
            Some(CarePlanStep {
                title: step.title.filter(|t| !t.trim().is_empty())?,
                description: step.description.unwrap_or_default(),
                recommended_duration: step.recommended_duration,
                place_type: step.place_type,
                image_keyword: step.image_keyword,
                coordinates: coordinates(step.coordinates),
            })
        })
        .collect::<Vec<_>>();
    if personal_plan.is_empty() {
        return Err(GeneratorError::parse("no usable 'personalPlan' steps"));
    }

    let group_plan = raw
        .group_plan
        .into_iter()
        .filter_map(|adj| {
            Some(GroupAdjustment {
                title: adj.title.filter(|t| !t.trim().is_empty())?,
                description: adj.description.unwrap_or_default(),
                recommended_adjustment: adj.recommended_adjustment,
                reasoning: adj.reasoning,
                image_keyword: adj.image_keyword,
            })
        })
        .collect();

    Ok(CareModePlan {
        condition,
        personal_plan,
        group_plan,
        recheck_in_minutes: raw.recheck_in_minutes.unwrap_or(30),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_only_response_parses_without_trip() {
        let parsed = parse_itinerary(r#"{"response": "Where to next?"}"#).unwrap();
        assert_eq!(parsed.response, "Where to next?");
        assert!(parsed.trip.is_none());
    }

    #[test]
    fn full_itinerary_parses_with_shadow() {
        let text = r#"{
            "response": "Three days in Nice!",
            "trip": {
                "destination": "Nice, France",
                "coordinates": {"lat": 43.71, "lng": 7.26},
                "startDate": "2026-09-10",
                "endDate": "2026-09-13",
                "budget": 1200,
                "activities": [
                    {
                        "day": 1,
                        "title": "Coastal Hike",
                        "description": "Cliff path walk",
                        "category": "activity",
                        "time": "09:00",
                        "duration": "3 hours",
                        "location": "Cap Ferrat",
                        "coordinates": {"lat": 43.68, "lng": 7.33},
                        "imageKeyword": "coastal path",
                        "cost": 0,
                        "orderIndex": 0,
                        "shadowOption": {
                            "title": "Promenade Stroll",
                            "description": "Flat and easy",
                            "category": "activity",
                            "time": "09:00",
                            "duration": "1 hour",
                            "location": "Promenade des Anglais",
                            "coordinates": {"lat": 43.69, "lng": 7.25},
                            "cost": 0
                        }
                    }
                ]
            }
        }"#;

        let parsed = parse_itinerary(text).unwrap();
        let trip = parsed.trip.unwrap();
        assert_eq!(trip.destination, "Nice, France");
        assert_eq!(trip.activities.len(), 1);
        let shadow = trip.activities[0].shadow_option.as_ref().unwrap();
        assert_eq!(shadow.title, "Promenade Stroll");
    }

    #[test]
    fn non_json_is_a_parse_error() {
        assert!(matches!(
            parse_itinerary("Sure! Here's a plan..."),
            Err(GeneratorError::Parse(_))
        ));
    }

    #[test]
    fn missing_response_field_is_rejected() {
        assert!(parse_itinerary(r#"{"trip": null}"#).is_err());
    }

    #[test]
    fn trip_level_defect_rejects_the_payload() {
        let text = r#"{
            "response": "ok",
            "trip": {"destination": "", "startDate": "2026-01-01", "endDate": "2026-01-02", "budget": 100, "activities": []}
        }"#;
        assert!(parse_itinerary(text).is_err());

        let text = r#"{
            "response": "ok",
            "trip": {"destination": "Nice", "startDate": "2026-01-01", "endDate": "2026-01-02", "budget": -5, "activities": []}
        }"#;
        assert!(parse_itinerary(text).is_err());
    }

    #[test]
    fn malformed_activity_rows_are_dropped_not_fatal() {
        let text = r#"{
            "response": "ok",
            "trip": {
                "destination": "Nice, France",
                "startDate": "2026-09-10",
                "endDate": "2026-09-13",
                "budget": 1200,
                "activities": [
                    {"day": 1, "title": "Good Row", "category": "activity", "location": "Town", "cost": 10},
                    {"day": 0, "title": "Bad Day", "category": "activity", "location": "Town"},
                    {"day": 1, "title": "", "category": "activity", "location": "Town"},
                    {"day": 1, "title": "Bad Category", "category": "nightclub", "location": "Town"},
                    {"day": 1, "title": "Negative Cost", "category": "activity", "location": "Town", "cost": -3}
                ]
            }
        }"#;

        let trip = parse_itinerary(text).unwrap().trip.unwrap();
        assert_eq!(trip.activities.len(), 1);
        assert_eq!(trip.activities[0].title, "Good Row");
    }

    #[test]
    fn malformed_shadow_is_dropped_but_main_survives() {
        let text = r#"{
            "response": "ok",
            "trip": {
                "destination": "Nice, France",
                "startDate": "2026-09-10",
                "endDate": "2026-09-13",
                "budget": 1200,
                "activities": [
                    {"day": 1, "title": "Hike", "category": "activity", "location": "Hills",
                     "shadowOption": {"title": "", "location": "Spa"}}
                ]
            }
        }"#;

        let trip = parse_itinerary(text).unwrap().trip.unwrap();
        assert_eq!(trip.activities.len(), 1);
        assert!(trip.activities[0].shadow_option.is_none());
    }

    #[test]
    fn out_of_bounds_coordinates_become_unset() {
        let text = r#"{
            "response": "ok",
            "trip": {
                "destination": "Nowhere",
                "coordinates": {"lat": 500.0, "lng": 7.26},
                "startDate": "2026-09-10",
                "endDate": "2026-09-13",
                "budget": 100,
                "activities": []
            }
        }"#;
        let trip = parse_itinerary(text).unwrap().trip.unwrap();
        assert!(trip.coordinates.is_none());
    }

    #[test]
    fn missing_order_index_falls_back_to_position() {
        let text = r#"{
            "response": "ok",
            "trip": {
                "destination": "Nice, France",
                "startDate": "2026-09-10",
                "endDate": "2026-09-13",
                "budget": 1200,
                "activities": [
                    {"day": 1, "title": "First", "category": "activity", "location": "A"},
                    {"day": 1, "title": "Second", "category": "activity", "location": "B"}
                ]
            }
        }"#;
        let trip = parse_itinerary(text).unwrap().trip.unwrap();
        assert_eq!(trip.activities[0].order_index, 0);
        assert_eq!(trip.activities[1].order_index, 1);
    }

    #[test]
    fn pivot_proposal_parses_and_coerces_relaxation() {
        let text = r#"{
            "proposal": "Swap the hike for a spa hour.",
            "newActivity": {
                "title": "Thermal Spa",
                "description": "Warm pools",
                "category": "relaxation",
                "location": "Old town baths",
                "cost": 30,
                "duration": "2 hours"
            }
        }"#;
        let payload = parse_pivot_proposal(text).unwrap();
        assert_eq!(payload.new_activity.title, "Thermal Spa");
        assert_eq!(payload.new_activity.category, ActivityCategory::Activity);
    }

    #[test]
    fn pivot_proposal_requires_title_and_proposal() {
        assert!(parse_pivot_proposal(r#"{"newActivity": {"title": "X", "location": "Y"}}"#).is_err());
        assert!(parse_pivot_proposal(r#"{"proposal": "p", "newActivity": {"location": "Y"}}"#).is_err());
    }

    #[test]
    fn care_plan_parses_camel_case_fields() {
        let text = r#"{
            "condition": "migraine",
            "personalPlan": [
                {"title": "Quiet rest", "description": "Dim room", "recommendedDuration": "45 minutes", "placeType": "hotel"}
            ],
            "groupPlan": [
                {"title": "Slow morning", "description": "Push the tour back", "reasoning": "Give recovery time"}
            ],
            "recheckInMinutes": 20
        }"#;
        let plan = parse_care_plan(text).unwrap();
        assert_eq!(plan.condition, "migraine");
        assert_eq!(plan.recheck_in_minutes, 20);
        assert_eq!(plan.personal_plan.len(), 1);
        assert_eq!(plan.group_plan.len(), 1);
    }

    #[test]
    fn care_plan_without_personal_steps_is_rejected() {
        assert!(parse_care_plan(r#"{"condition": "tired", "personalPlan": []}"#).is_err());
    }
}
