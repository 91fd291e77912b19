//! Update history handler.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use meta_hooks_core::{Platform, UpdateRecord};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for listing updates.
#[derive(Debug, Deserialize)]
pub struct UpdatesQuery {
    /// Only return updates from this platform.
    pub platform: Option<String>,
}

/// List retained updates, newest first.
pub async fn list_updates(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UpdatesQuery>,
) -> Result<Json<Vec<UpdateRecord>>, ApiError> {
    let updates = match query.platform.as_deref().filter(|p| !p.is_empty()) {
        Some(raw) => {
            let platform: Platform = raw
                .parse()
                .map_err(|e: meta_hooks_core::CoreError| ApiError::BadRequest(e.to_string()))?;
            state.store.list_by_platform(platform)?
        }
        None => state.store.list()?,
    };

    tracing::debug!(count = updates.len(), "Listing updates");

    Ok(Json(updates))
}
