//! Error types for meta-hooks core types.

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur when parsing core types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    /// The platform name is not one of facebook, instagram, threads.
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    /// A record identifier was not a valid UUID.
    #[error("invalid record id: {0}")]
    InvalidRecordId(String),
}
