//! Ports - interfaces between the core and the outside world.
//!
//! Following hexagonal architecture, ports define the contracts the
//! application layer depends on. Adapters implement them.
//!
//! ## Store ports
//!
//! One repository per entity, plus `PivotCommitter` for the one write that
//! must touch an activity and the pivot log atomically.
//!
//! ## External collaborator ports
//!
//! - `ItineraryGenerator` - the LLM boundary (itineraries, pivot
//!   proposals, adaptations, care plans)
//! - `Geocoder` - best-effort place-name resolution; never a hard error

mod activity_repository;
mod budget_repository;
mod chat_repository;
mod geocoder;
mod itinerary_generator;
mod mood_repository;
mod pivot_committer;
mod pivot_log_repository;
mod preferences_repository;
mod trip_repository;

pub use activity_repository::ActivityRepository;
pub use budget_repository::BudgetItemRepository;
pub use chat_repository::ChatMessageRepository;
pub use geocoder::Geocoder;
pub use itinerary_generator::{
    AdaptationContext, CareModePlan, CarePlanStep, GeneratedActivity, GeneratedItinerary,
    GeneratedShadow, GeneratedTrip, GeneratorError, GroupAdjustment, ItineraryGenerator,
    PivotContext, PivotProposalPayload,
};
pub use mood_repository::MoodReadingRepository;
pub use pivot_committer::PivotCommitter;
pub use pivot_log_repository::PivotLogRepository;
pub use preferences_repository::PreferencesRepository;
pub use trip_repository::TripRepository;
