//! Health check handler.
//!
//! Reports whether the receiver can authenticate Facebook deliveries and how
//! much of the update history is in use.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` whenever the history is readable.
    pub status: &'static str,
    /// Package name of the running service.
    pub service: &'static str,
    /// Package version of the running service.
    pub version: &'static str,
    /// Whether an app secret is configured for Facebook signatures.
    pub signature_verification: bool,
    /// Updates currently retained.
    pub retained_updates: usize,
    /// Maximum number of retained updates.
    pub capacity: usize,
}

/// Health check endpoint.
///
/// A history that cannot be read is reported as a 500.
pub async fn health(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        signature_verification: state.has_app_secret(),
        retained_updates: state.store.len()?,
        capacity: state.store.capacity(),
    }))
}
