//! Shared holder of the latest collection result.
//!
//! The collector is the only writer. Readers get an `Arc` to an immutable
//! snapshot, so a scrape that races a publish sees either the old snapshot or
//! the new one in full.

use std::sync::{Arc, PoisonError, RwLock};

use crate::types::Snapshot;

#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    current: Arc<RwLock<Arc<Snapshot>>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, snapshot: Snapshot) {
        let next = Arc::new(snapshot);
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = next;
    }

    pub fn read(&self) -> Arc<Snapshot> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*current)
    }
}
