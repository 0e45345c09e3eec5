//! Pivot committer port - the one cross-entity atomic write.

use async_trait::async_trait;

use crate::domain::foundation::{ActivityId, DomainError, TripId};
use crate::domain::pivot::PivotSwap;
use crate::domain::trip::{Activity, NewPivotLog, PivotLog};

/// Port for confirming a pivot.
///
/// Applying the swap to the activity and appending the audit log entry is
/// one logical operation: a caller must never observe the activity updated
/// without its log entry, or the reverse. Implementations perform both
/// writes inside a single critical section.
#[async_trait]
pub trait PivotCommitter: Send + Sync {
    /// Applies `swap` to the activity (keeping its identity, dropping its
    /// energy requirement to low, clearing the shadow flag) and appends
    /// `log`.
    ///
    /// # Errors
    ///
    /// - `ActivityNotFound` if the activity is absent or belongs to a
    ///   different trip; nothing is written.
    async fn commit_pivot(
        &self,
        trip_id: TripId,
        activity_id: ActivityId,
        swap: PivotSwap,
        log: NewPivotLog,
    ) -> Result<(Activity, PivotLog), DomainError>;
}
