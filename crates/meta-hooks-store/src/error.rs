//! Error types for meta-hooks storage.

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The history lock was poisoned by a panicking writer.
    #[error("update history lock poisoned")]
    Poisoned,
}
