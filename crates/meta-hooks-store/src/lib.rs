//! In-memory storage layer for meta-hooks.
//!
//! This crate retains the most recent webhook deliveries for display. Nothing
//! is persisted: the history starts empty when the process starts and is
//! dropped when it exits.
//!
//! # Ordering and Capacity
//!
//! Records are kept newest-first. Once the history holds [`UPDATE_CAPACITY`]
//! records, every append evicts the oldest one, so readers never observe more
//! than the capacity.
//!
//! # Example
//!
//! ```
//! use meta_hooks_core::{Platform, UpdateRecord};
//! use meta_hooks_store::{MemoryStore, UpdateStore};
//!
//! let store = MemoryStore::new();
//! store
//!     .append(UpdateRecord::capture(Platform::Instagram, serde_json::json!({"a": 1})))
//!     .unwrap();
//!
//! let updates = store.list().unwrap();
//! assert_eq!(updates[0].platform, Platform::Instagram);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod memory;

pub use error::{Result, StoreError};
pub use memory::{MemoryStore, UPDATE_CAPACITY};

use meta_hooks_core::{Platform, UpdateRecord};

/// The storage trait for received updates.
///
/// Implementations must treat `append` as a single atomic step: concurrent
/// callers never see the history above capacity and never lose an append.
pub trait UpdateStore: Send + Sync {
    /// Insert a record as the newest entry, evicting the oldest beyond capacity.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if a previous writer panicked mid-update.
    fn append(&self, record: UpdateRecord) -> Result<()>;

    /// Return all retained records, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if a previous writer panicked mid-update.
    fn list(&self) -> Result<Vec<UpdateRecord>>;

    /// Return retained records from one platform, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if a previous writer panicked mid-update.
    fn list_by_platform(&self, platform: Platform) -> Result<Vec<UpdateRecord>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|record| record.platform == platform)
            .collect())
    }

    /// Number of retained records.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if a previous writer panicked mid-update.
    fn len(&self) -> Result<usize>;

    /// Whether no records are retained.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if a previous writer panicked mid-update.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Maximum number of records retained.
    fn capacity(&self) -> usize;
}
