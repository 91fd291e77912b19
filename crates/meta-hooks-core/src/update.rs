//! Captured webhook deliveries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Platform, RecordId};

/// One webhook delivery as retained for display.
///
/// The payload is kept exactly as the platform sent it. `received_at` is the
/// receiver's clock at capture, never a platform-supplied timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRecord {
    /// Identifier assigned at capture.
    pub id: RecordId,

    /// The platform the delivery arrived on.
    pub platform: Platform,

    /// When the receiver accepted the delivery.
    pub received_at: DateTime<Utc>,

    /// The delivered JSON body.
    pub payload: serde_json::Value,
}

impl UpdateRecord {
    /// Capture a delivery now.
    #[must_use]
    pub fn capture(platform: Platform, payload: serde_json::Value) -> Self {
        Self::captured_at(platform, payload, Utc::now())
    }

    /// Capture a delivery at an explicit time.
    #[must_use]
    pub fn captured_at(
        platform: Platform,
        payload: serde_json::Value,
        received_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: RecordId::generate(),
            platform,
            received_at,
            payload,
        }
    }
}
