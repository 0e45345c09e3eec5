//! Budget ledger service - keeps `Trip.spent` consistent with the trip's
//! budget item set.
//!
//! Invariant: after any sequence of item creates/deletes and activity
//! completion toggles reaches quiescence, `trip.spent` equals the sum of
//! the trip's budget item amounts, clamped at zero. Every method here runs
//! its mutate-then-recompute sequence under the trip's lock.

use std::sync::Arc;

use crate::application::TripLocks;
use crate::domain::foundation::{BudgetItemId, DomainError, ErrorCode, Timestamp, TripId};
use crate::domain::trip::{Activity, ActivityPatch, BudgetItem, NewBudgetItem, Trip};
use crate::ports::{ActivityRepository, BudgetItemRepository, TripRepository};

/// Service owning the derived-spend rule.
pub struct BudgetLedger {
    trips: Arc<dyn TripRepository>,
    activities: Arc<dyn ActivityRepository>,
    budget_items: Arc<dyn BudgetItemRepository>,
    locks: Arc<TripLocks>,
}

impl BudgetLedger {
    pub fn new(
        trips: Arc<dyn TripRepository>,
        activities: Arc<dyn ActivityRepository>,
        budget_items: Arc<dyn BudgetItemRepository>,
        locks: Arc<TripLocks>,
    ) -> Self {
        Self {
            trips,
            activities,
            budget_items,
            locks,
        }
    }

    /// Inserts a directly created budget item and recomputes spend.
    pub async fn add_item(&self, new: NewBudgetItem) -> Result<(BudgetItem, Trip), DomainError> {
        let trip_id = new.trip_id;
        let _guard = self.locks.acquire(trip_id).await;

        self.require_trip(trip_id).await?;
        let item = self.budget_items.create(new).await?;
        let trip = self.recompute(trip_id).await?;
        Ok((item, trip))
    }

    /// Deletes a budget item and recomputes spend.
    pub async fn remove_item(&self, id: BudgetItemId) -> Result<Trip, DomainError> {
        let item = self
            .budget_items
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::BudgetItemNotFound, "Budget item not found"))?;

        let _guard = self.locks.acquire(item.trip_id).await;
        self.budget_items.delete(id).await?;
        self.recompute(item.trip_id).await
    }

    /// Applies a patch to an activity and, when the patch flips the
    /// completion flag, mirrors or unmirrors the activity's cost in the
    /// ledger.
    ///
    /// - false -> true with cost > 0: append a mirrored item
    ///   (category/description/amount from the activity, today's date,
    ///   `source_activity_id` set) and recompute.
    /// - true -> false: delete the item mirrored from this activity, if
    ///   one exists, and recompute.
    /// - No flip: plain patch, no ledger work.
    pub async fn apply_activity_patch(
        &self,
        activity: &Activity,
        patch: ActivityPatch,
    ) -> Result<(Activity, Option<Trip>), DomainError> {
        let flips_to = match patch.completed {
            Some(requested) if requested != activity.completed => Some(requested),
            _ => None,
        };
        // Cost may change in the same patch; mirror the post-patch value.
        let mirrored_cost = patch.cost.unwrap_or(activity.cost);

        let Some(completed) = flips_to else {
            let updated = self.activities.update(activity.id, patch).await?;
            return Ok((updated, None));
        };

        let _guard = self.locks.acquire(activity.trip_id).await;
        let updated = self.activities.update(activity.id, patch).await?;

        if completed && mirrored_cost > 0.0 {
            self.budget_items
                .create(NewBudgetItem {
                    trip_id: updated.trip_id,
                    category: updated.category.to_string(),
                    amount: mirrored_cost,
                    description: updated.title.clone(),
                    date: Timestamp::now().to_iso_date(),
                    source_activity_id: Some(updated.id),
                })
                .await?;
        } else if !completed {
            if let Some(item) = self
                .budget_items
                .find_by_source_activity(updated.id)
                .await?
            {
                self.budget_items.delete(item.id).await?;
            }
        }

        let trip = self.recompute(updated.trip_id).await?;
        Ok((updated, Some(trip)))
    }

    /// Re-aligns the mirrored item after a pivot rewrote a completed
    /// activity's cost or title, then recomputes spend.
    pub async fn refresh_mirrored_item(&self, activity: &Activity) -> Result<Option<Trip>, DomainError> {
        if !activity.completed {
            return Ok(None);
        }
        let Some(item) = self
            .budget_items
            .find_by_source_activity(activity.id)
            .await?
        else {
            return Ok(None);
        };

        let _guard = self.locks.acquire(activity.trip_id).await;
        self.budget_items
            .update_mirrored(
                item.id,
                activity.cost,
                activity.title.clone(),
                activity.category.to_string(),
            )
            .await?;
        let trip = self.recompute(activity.trip_id).await?;
        Ok(Some(trip))
    }

    /// Rewrites `trip.spent` as the clamped sum of the trip's items.
    async fn recompute(&self, trip_id: TripId) -> Result<Trip, DomainError> {
        let items = self.budget_items.list_by_trip(trip_id).await?;
        let total: f64 = items.iter().map(|item| item.amount).sum();
        self.trips.set_spent(trip_id, total.max(0.0)).await
    }

    async fn require_trip(&self, trip_id: TripId) -> Result<Trip, DomainError> {
        self.trips
            .find_by_id(trip_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::TripNotFound, "Trip not found"))
    }
}
