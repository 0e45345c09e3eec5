//! Per-trip mutual exclusion for mutate-then-recompute sequences.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::foundation::TripId;

/// Registry of per-trip async locks.
///
/// The budget ledger's sum-then-write recomputation is not atomic with the
/// mutation that triggered it, so every cost-bearing sequence for a trip
/// runs under that trip's lock. Locks are created on first use and kept
/// for the life of the process; trips number in the dozens, not millions.
#[derive(Debug, Default)]
pub struct TripLocks {
    locks: Mutex<HashMap<TripId, Arc<Mutex<()>>>>,
}

impl TripLocks {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock for a trip, waiting if another operation on the
    /// same trip holds it.
    pub async fn acquire(&self, trip_id: TripId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.entry(trip_id).or_default().clone()
        };
        lock.lock_owned().await
    }
}
