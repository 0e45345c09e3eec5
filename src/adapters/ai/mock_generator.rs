//! Mock generator for tests.
//!
//! Scripted responses are consumed in order; call counts and captured
//! inputs allow tests to verify exactly when the generator was invoked.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::trip::{Activity, TravelerPreferences};
use crate::ports::{
    AdaptationContext, CareModePlan, GeneratedItinerary, GeneratorError, ItineraryGenerator,
    PivotContext, PivotProposalPayload,
};

#[derive(Default)]
struct Scripts {
    itineraries: VecDeque<GeneratedItinerary>,
    pivot_proposals: VecDeque<PivotProposalPayload>,
    adaptations: VecDeque<String>,
    care_plans: VecDeque<CareModePlan>,
}

#[derive(Default)]
struct Calls {
    itinerary: u32,
    pivot: u32,
    adaptation_summaries: Vec<String>,
    care: u32,
}

/// Configurable mock implementation of the generator port.
#[derive(Default)]
pub struct MockGenerator {
    scripts: Mutex<Scripts>,
    calls: Mutex<Calls>,
    failure: Option<FailureScript>,
}

/// Cloneable description of the error every call should fail with.
enum FailureScript {
    RateLimited { retry_after_secs: u32 },
    Unavailable { message: String },
    AuthenticationFailed,
    Network(String),
    Timeout { timeout_secs: u32 },
    Parse(String),
    InvalidRequest(String),
}

impl FailureScript {
    fn to_error(&self) -> GeneratorError {
        match self {
            FailureScript::RateLimited { retry_after_secs } => GeneratorError::RateLimited {
                retry_after_secs: *retry_after_secs,
            },
            FailureScript::Unavailable { message } => GeneratorError::unavailable(message.clone()),
            FailureScript::AuthenticationFailed => GeneratorError::AuthenticationFailed,
            FailureScript::Network(message) => GeneratorError::network(message.clone()),
            FailureScript::Timeout { timeout_secs } => GeneratorError::Timeout {
                timeout_secs: *timeout_secs,
            },
            FailureScript::Parse(message) => GeneratorError::parse(message.clone()),
            FailureScript::InvalidRequest(message) => {
                GeneratorError::InvalidRequest(message.clone())
            }
        }
    }
}

impl From<GeneratorError> for FailureScript {
    fn from(err: GeneratorError) -> Self {
        match err {
            GeneratorError::RateLimited { retry_after_secs } => {
                FailureScript::RateLimited { retry_after_secs }
            }
            GeneratorError::Unavailable { message } => FailureScript::Unavailable { message },
            GeneratorError::AuthenticationFailed => FailureScript::AuthenticationFailed,
            GeneratorError::Network(message) => FailureScript::Network(message),
            GeneratorError::Timeout { timeout_secs } => FailureScript::Timeout { timeout_secs },
            GeneratorError::Parse(message) => FailureScript::Parse(message),
            GeneratorError::InvalidRequest(message) => FailureScript::InvalidRequest(message),
        }
    }
}

impl MockGenerator {
    /// Creates a mock with no scripted responses; any call fails with
    /// `Unavailable` until responses are queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an itinerary response.
    pub fn with_itinerary(self, itinerary: GeneratedItinerary) -> Self {
        self.scripts.lock().unwrap().itineraries.push_back(itinerary);
        self
    }

    /// Queues a pivot proposal response.
    pub fn with_pivot_proposal(self, payload: PivotProposalPayload) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .pivot_proposals
            .push_back(payload);
        self
    }

    /// Queues an adaptation response.
    pub fn with_adaptation(self, suggestions: impl Into<String>) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .adaptations
            .push_back(suggestions.into());
        self
    }

    /// Queues a care plan response.
    pub fn with_care_plan(self, plan: CareModePlan) -> Self {
        self.scripts.lock().unwrap().care_plans.push_back(plan);
        self
    }

    /// Makes every call fail with (a copy of) the given error.
    pub fn failing(mut self, error: GeneratorError) -> Self {
        self.failure = Some(error.into());
        self
    }

    /// Number of itinerary calls seen.
    pub fn itinerary_calls(&self) -> u32 {
        self.calls.lock().unwrap().itinerary
    }

    /// Number of pivot proposal calls seen.
    pub fn pivot_calls(&self) -> u32 {
        self.calls.lock().unwrap().pivot
    }

    /// Itinerary summaries passed to adaptation calls.
    pub fn adaptation_summaries(&self) -> Vec<String> {
        self.calls.lock().unwrap().adaptation_summaries.clone()
    }

    /// Number of care plan calls seen.
    pub fn care_calls(&self) -> u32 {
        self.calls.lock().unwrap().care
    }

    fn fail_if_scripted(&self) -> Result<(), GeneratorError> {
        match &self.failure {
            Some(script) => Err(script.to_error()),
            None => Ok(()),
        }
    }
}

fn exhausted() -> GeneratorError {
    GeneratorError::unavailable("mock generator has no scripted response")
}

#[async_trait]
impl ItineraryGenerator for MockGenerator {
    async fn generate_itinerary(
        &self,
        _user_text: &str,
        _preferences: Option<&TravelerPreferences>,
    ) -> Result<GeneratedItinerary, GeneratorError> {
        self.calls.lock().unwrap().itinerary += 1;
        self.fail_if_scripted()?;
        self.scripts
            .lock()
            .unwrap()
            .itineraries
            .pop_front()
            .ok_or_else(exhausted)
    }

    async fn pivot_proposal(
        &self,
        _activity: &Activity,
        _context: &PivotContext,
    ) -> Result<PivotProposalPayload, GeneratorError> {
        self.calls.lock().unwrap().pivot += 1;
        self.fail_if_scripted()?;
        self.scripts
            .lock()
            .unwrap()
            .pivot_proposals
            .pop_front()
            .ok_or_else(exhausted)
    }

    async fn adapt_itinerary(
        &self,
        activities_summary: &str,
        _context: &AdaptationContext,
    ) -> Result<String, GeneratorError> {
        self.calls
            .lock()
            .unwrap()
            .adaptation_summaries
            .push(activities_summary.to_string());
        self.fail_if_scripted()?;
        self.scripts
            .lock()
            .unwrap()
            .adaptations
            .pop_front()
            .ok_or_else(exhausted)
    }

    async fn care_plan(
        &self,
        _condition: &str,
        _destination: &str,
        _current_activity: Option<&str>,
    ) -> Result<CareModePlan, GeneratorError> {
        self.calls.lock().unwrap().care += 1;
        self.fail_if_scripted()?;
        self.scripts
            .lock()
            .unwrap()
            .care_plans
            .pop_front()
            .ok_or_else(exhausted)
    }
}
