//! Request and response types for the meta-hooks API.

use serde::{Deserialize, Serialize};

pub use meta_hooks_core::{Platform, UpdateRecord};

/// Response to an accepted delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookResponse {
    /// Whether the delivery was stored.
    pub received: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
    /// Whether the receiver can verify Facebook signatures.
    pub signature_verification: bool,
    /// Updates currently retained.
    pub retained_updates: usize,
    /// Maximum number of retained updates.
    pub capacity: usize,
}

/// Error response body returned by the receiver.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Error details.
    pub error: ApiErrorBody,
}

/// Error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Machine-readable code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}
