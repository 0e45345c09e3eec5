//! Budget item handlers - direct ledger entries.

use std::sync::Arc;

use crate::application::BudgetLedger;
use crate::domain::foundation::{BudgetItemId, DomainError, TripId, ValidationError};
use crate::domain::trip::{BudgetItem, NewBudgetItem, Trip};

/// Command to create a budget item directly.
#[derive(Debug, Clone)]
pub struct CreateBudgetItemCommand {
    pub trip_id: TripId,
    pub category: String,
    pub amount: f64,
    pub description: String,
    pub date: String,
}

/// Result: the item plus the trip with recomputed spend.
#[derive(Debug, Clone)]
pub struct CreateBudgetItemResult {
    pub item: BudgetItem,
    pub trip: Trip,
}

/// Error type for budget item commands.
#[derive(Debug, thiserror::Error)]
pub enum CreateBudgetItemError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Handler for direct budget item creation.
pub struct CreateBudgetItemHandler {
    ledger: Arc<BudgetLedger>,
}

impl CreateBudgetItemHandler {
    pub fn new(ledger: Arc<BudgetLedger>) -> Self {
        Self { ledger }
    }

    pub async fn handle(
        &self,
        cmd: CreateBudgetItemCommand,
    ) -> Result<CreateBudgetItemResult, CreateBudgetItemError> {
        if !cmd.amount.is_finite() {
            return Err(ValidationError::invalid_format("amount", "must be finite").into());
        }

        let (item, trip) = self
            .ledger
            .add_item(NewBudgetItem {
                trip_id: cmd.trip_id,
                category: cmd.category,
                amount: cmd.amount,
                description: cmd.description,
                date: cmd.date,
                // Direct entries are not tied to an activity.
                source_activity_id: None,
            })
            .await?;

        Ok(CreateBudgetItemResult { item, trip })
    }
}

/// Handler for budget item deletion (spend recomputes).
pub struct DeleteBudgetItemHandler {
    ledger: Arc<BudgetLedger>,
}

impl DeleteBudgetItemHandler {
    pub fn new(ledger: Arc<BudgetLedger>) -> Self {
        Self { ledger }
    }

    pub async fn handle(&self, id: BudgetItemId) -> Result<Trip, CreateBudgetItemError> {
        Ok(self.ledger.remove_item(id).await?)
    }
}
