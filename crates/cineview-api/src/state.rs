//! Application state.

use crate::config::ApiConfig;
use crate::services::DecisionService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub decisions: DecisionService,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: ApiConfig) -> Self {
        let decisions = DecisionService::new(config.cache_capacity, config.cache_ttl);
        Self { config, decisions }
    }
}
