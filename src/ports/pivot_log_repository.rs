//! Pivot log repository port (append-only audit trail).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, TripId};
use crate::domain::trip::{NewPivotLog, PivotLog};

/// Repository port for the append-only pivot audit trail.
#[async_trait]
pub trait PivotLogRepository: Send + Sync {
    /// Appends an audit entry. Entries are never mutated or deleted.
    async fn append(&self, new: NewPivotLog) -> Result<PivotLog, DomainError>;

    /// Lists a trip's entries, most recent first.
    async fn list_by_trip(&self, trip_id: TripId) -> Result<Vec<PivotLog>, DomainError>;
}
