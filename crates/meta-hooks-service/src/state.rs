//! Application state.

use std::sync::Arc;

use meta_hooks_store::{MemoryStore, UpdateStore};

use crate::config::ServiceConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Recent update history.
    pub store: Arc<dyn UpdateStore>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state, reporting configuration warnings.
    #[must_use]
    pub fn new(store: Arc<dyn UpdateStore>, config: ServiceConfig) -> Self {
        for warning in config.warnings() {
            tracing::warn!(warning = %warning, "Configuration warning");
        }

        let state = Self { store, config };
        if state.has_app_secret() {
            tracing::info!("Facebook signature verification enabled");
        }
        state
    }

    /// Create state backed by a fresh, empty in-memory history.
    #[must_use]
    pub fn in_memory(config: ServiceConfig) -> Self {
        Self::new(Arc::new(MemoryStore::new()), config)
    }

    /// Check if an app secret is configured.
    #[must_use]
    pub fn has_app_secret(&self) -> bool {
        self.config.app_secret.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_secret_presence_follows_config() {
        let state = AppState::in_memory(ServiceConfig::default());
        assert!(!state.has_app_secret());

        let state = AppState::in_memory(ServiceConfig {
            app_secret: Some("s3cr3t".into()),
            ..ServiceConfig::default()
        });
        assert!(state.has_app_secret());
    }

    #[test]
    fn in_memory_state_starts_empty() {
        let state = AppState::in_memory(ServiceConfig::default());
        assert!(state.store.is_empty().unwrap());
        assert_eq!(state.store.capacity(), meta_hooks_store::UPDATE_CAPACITY);
    }
}
