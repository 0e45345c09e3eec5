//! Budget item entity - one row in a trip's spending ledger.

use crate::domain::foundation::{ActivityId, BudgetItemId, Timestamp, TripId, ValidationError};

/// One ledger entry for a trip.
///
/// `source_activity_id` is set on items mirrored from an activity
/// completion toggle; reversing the toggle deletes exactly that item.
/// Directly created items leave it unset.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetItem {
    pub id: BudgetItemId,
    pub trip_id: TripId,
    pub category: String,
    pub amount: f64,
    pub description: String,
    pub date: String,
    pub source_activity_id: Option<ActivityId>,
    pub created_at: Timestamp,
}

/// Data required to create a budget item.
#[derive(Debug, Clone)]
pub struct NewBudgetItem {
    pub trip_id: TripId,
    pub category: String,
    pub amount: f64,
    pub description: String,
    pub date: String,
    pub source_activity_id: Option<ActivityId>,
}

impl BudgetItem {
    /// Creates a budget item.
    pub fn create(new: NewBudgetItem) -> Result<Self, ValidationError> {
        if new.category.trim().is_empty() {
            return Err(ValidationError::empty_field("category"));
        }
        if new.description.trim().is_empty() {
            return Err(ValidationError::empty_field("description"));
        }
        if new.date.trim().is_empty() {
            return Err(ValidationError::empty_field("date"));
        }
        if !new.amount.is_finite() {
            return Err(ValidationError::invalid_format("amount", "must be finite"));
        }

        Ok(Self {
            id: BudgetItemId::new(),
            trip_id: new.trip_id,
            category: new.category,
            amount: new.amount,
            description: new.description,
            date: new.date,
            source_activity_id: new.source_activity_id,
            created_at: Timestamp::now(),
        })
    }

    /// True for items mirrored from a completion toggle.
    pub fn is_mirrored(&self) -> bool {
        self.source_activity_id.is_some()
    }
}
