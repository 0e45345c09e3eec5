//! Prompt builders for the generator adapter.
//!
//! Each builder returns the full instruction text for one generator call.
//! JSON-producing prompts spell out the exact shape the payload module
//! validates against.

use chrono::{Datelike, Utc};

use crate::domain::trip::{Activity, TravelerPreferences};
use crate::ports::{AdaptationContext, PivotContext};

fn preferences_block(preferences: Option<&TravelerPreferences>) -> String {
    match preferences {
        Some(p) => format!(
            "\nTraveler preferences:\n- Budget: {:?}\n- Interests: {}\n- Dietary: {}\n- Pace: {:?}\n- Travel style: {:?}\n",
            p.budget,
            p.interests.join(", "),
            p.dietary.join(", "),
            p.pace,
            p.travel_style,
        ),
        None => String::new(),
    }
}

/// System instruction for one-shot itinerary generation.
pub fn itinerary_system_prompt(preferences: Option<&TravelerPreferences>) -> String {
    let today = Utc::now().format("%Y-%m-%d");
    let year = Utc::now().year();

    format!(
        r#"You are an expert travel assistant that creates personalized, adaptive, wellness-aware itineraries.

Today's date is {today}. All trip dates MUST be {today} or later; never use dates from {} or earlier.
{}
If the user is requesting a trip plan, respond ONLY with JSON of this shape:

{{
  "response": "Short warm summary",
  "trip": {{
    "destination": "City, Country",
    "coordinates": {{ "lat": 0.0, "lng": 0.0 }},
    "startDate": "YYYY-MM-DD",
    "endDate": "YYYY-MM-DD",
    "budget": number,
    "activities": [
      {{
        "day": 1,
        "title": "Activity Title",
        "description": "Inviting, vivid description",
        "category": "activity|restaurant|accommodation|transport",
        "time": "HH:MM",
        "duration": "X hours",
        "location": "Place name",
        "coordinates": {{ "lat": 0.0, "lng": 0.0 }},
        "imageKeyword": "short image search phrase",
        "cost": number,
        "orderIndex": 0,
        "shadowOption": {{
          "title": "Low-energy alternative",
          "description": "Gentler option for tired days",
          "category": "activity|restaurant",
          "time": "HH:MM",
          "duration": "X hours",
          "location": "Place name",
          "coordinates": {{ "lat": 0.0, "lng": 0.0 }},
          "cost": number
        }}
      }}
    ]
  }}
}}

Rules:
1. Every activity should have realistic coordinates and an imageKeyword.
2. Strenuous activities MUST include a shadowOption.
3. JSON only. If the user is just chatting, respond with {{"response": "..."}} and no trip."#,
        year - 1,
        preferences_block(preferences),
    )
}

/// Prompt for synthesizing a pivot proposal.
pub fn pivot_prompt(activity: &Activity, context: &PivotContext) -> String {
    format!(
        r#"The group is feeling {}.

Current planned activity: {} ({}) at {}.
Location: {}
Budget remaining: ${}

Generate a replacement proposal as JSON:
{{
  "proposal": "one or two sentences pitching the swap",
  "newActivity": {{
    "title": "...",
    "description": "...",
    "category": "activity|restaurant|relaxation",
    "location": "...",
    "cost": number,
    "duration": "..."
  }}
}}

The replacement must suit low energy. JSON only."#,
        context.group_mood,
        activity.title,
        activity.category,
        activity.time,
        context.location,
        context.budget_remaining,
    )
}

/// Prompt for free-text adaptation suggestions.
pub fn adaptation_prompt(activities_summary: &str, context: &AdaptationContext) -> String {
    format!(
        r#"Given the current itinerary and context, suggest adaptations.

Current activities:
{}

Context:
- Weather: {}
- Current time: {}
- Budget remaining: ${}

Provide 2-3 smart alternative suggestions that adapt to the current conditions."#,
        activities_summary,
        context.weather.as_deref().unwrap_or("unknown"),
        context.time.as_deref().unwrap_or("unknown"),
        context
            .budget_remaining
            .map(|b| b.to_string())
            .unwrap_or_else(|| "unknown".to_string()),
    )
}

/// Prompt for a Care Mode wellness plan.
pub fn care_prompt(condition: &str, destination: &str, current_activity: Option<&str>) -> String {
    format!(
        r#"A traveler reported: "{}"
Trip destination: {}
Current activity: {}

Generate a wellness micro-itinerary as JSON:
{{
  "condition": "...",
  "personalPlan": [
    {{
      "title": "...",
      "description": "...",
      "recommendedDuration": "...",
      "placeType": "...",
      "imageKeyword": "...",
      "coordinates": {{ "lat": 0, "lng": 0 }}
    }}
  ],
  "groupPlan": [
    {{
      "title": "...",
      "description": "...",
      "recommendedAdjustment": "...",
      "reasoning": "...",
      "imageKeyword": "..."
    }}
  ],
  "recheckInMinutes": 30
}}

personalPlan must be calm, gentle, and safe. groupPlan must adjust the trip
minimally. Be empathetic but concise. JSON only."#,
        condition,
        destination,
        current_activity.unwrap_or("general sightseeing"),
    )
}
