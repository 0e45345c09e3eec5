//! Pivot module - the mood-triggered re-planning rules.
//!
//! Covers the decision policy (when does group energy warrant proposing a
//! swap) and the proposal/swap value objects the pivot engine exchanges
//! with its callers.

mod policy;
mod proposal;

pub use policy::PivotPolicy;
pub use proposal::{PivotProposal, PivotSwap, ProposedActivity};
