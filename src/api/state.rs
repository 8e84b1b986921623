//! Application state for the payroll API.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::models::CompanySettings;

/// Shared application state.
///
/// Holds the loaded configuration, shared read-only across all handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the configured company settings.
    pub fn company(&self) -> &CompanySettings {
        self.config.company()
    }
}
