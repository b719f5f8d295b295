//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::Services;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the backend service handles.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    services: Services,
}

impl AppState {
    /// Create the application state, performing the single capability check:
    /// without Appwrite configuration the null-object service handles are
    /// installed and every backend-dependent operation yields its
    /// "unavailable" sentinel.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let services = match config.appwrite.as_ref() {
            Some(appwrite) => Services::appwrite(appwrite),
            None => {
                tracing::warn!("backend not configured; running with unavailable service handles");
                Services::unavailable()
            }
        };

        Self::with_services(config, services)
    }

    /// Create state with explicit service handles (test substitution).
    #[must_use]
    pub fn with_services(config: AppConfig, services: Services) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, services }),
        }
    }

    /// Get a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get the backend service handles.
    #[must_use]
    pub fn services(&self) -> &Services {
        &self.inner.services
    }
}
