//! Bounded newest-first history backed by a mutex-guarded deque.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use meta_hooks_core::UpdateRecord;

use crate::error::{Result, StoreError};
use crate::UpdateStore;

/// Number of updates retained for display.
pub const UPDATE_CAPACITY: usize = 100;

/// In-process update history.
///
/// The front of the deque is the newest record. Insert and eviction happen
/// under the same guard.
#[derive(Debug)]
pub struct MemoryStore {
    records: Mutex<VecDeque<UpdateRecord>>,
    capacity: usize,
}

impl MemoryStore {
    /// Create an empty history holding up to [`UPDATE_CAPACITY`] records.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(UPDATE_CAPACITY)
    }

    /// Create an empty history with a custom capacity.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: Mutex::new(VecDeque::with_capacity(capacity + 1)),
            capacity,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, VecDeque<UpdateRecord>>> {
        self.records.lock().map_err(|_| {
            tracing::error!("Update history lock poisoned");
            StoreError::Poisoned
        })
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateStore for MemoryStore {
    fn append(&self, record: UpdateRecord) -> Result<()> {
        let mut records = self.lock()?;
        records.push_front(record);
        if records.len() > self.capacity {
            let evicted = records.len() - self.capacity;
            records.truncate(self.capacity);
            tracing::trace!(evicted, "Evicted oldest updates");
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<UpdateRecord>> {
        Ok(self.lock()?.iter().cloned().collect())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
