//! Budget item repository port.

use async_trait::async_trait;

use crate::domain::foundation::{ActivityId, BudgetItemId, DomainError, TripId};
use crate::domain::trip::{BudgetItem, NewBudgetItem};

/// Repository port for budget ledger items.
#[async_trait]
pub trait BudgetItemRepository: Send + Sync {
    /// Creates a budget item and returns the stored entity.
    async fn create(&self, new: NewBudgetItem) -> Result<BudgetItem, DomainError>;

    /// Finds an item by id. Returns `None` if absent.
    async fn find_by_id(&self, id: BudgetItemId) -> Result<Option<BudgetItem>, DomainError>;

    /// Lists a trip's items, date descending.
    async fn list_by_trip(&self, trip_id: TripId) -> Result<Vec<BudgetItem>, DomainError>;

    /// Finds the item mirrored from a completion toggle of the given
    /// activity, if one exists.
    async fn find_by_source_activity(
        &self,
        activity_id: ActivityId,
    ) -> Result<Option<BudgetItem>, DomainError>;

    /// Rewrites a mirrored item after its source activity changed.
    /// Fails with `BudgetItemNotFound` if absent.
    async fn update_mirrored(
        &self,
        id: BudgetItemId,
        amount: f64,
        description: String,
        category: String,
    ) -> Result<BudgetItem, DomainError>;

    /// Deletes an item. Fails with `BudgetItemNotFound` if absent.
    async fn delete(&self, id: BudgetItemId) -> Result<(), DomainError>;
}
