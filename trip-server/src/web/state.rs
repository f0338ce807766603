//! Application state for the web layer.

use std::sync::Arc;

use crate::data::ReferenceTables;
use crate::recommend::RecommendConfig;

/// Shared application state.
///
/// Holds the read-only reference tables loaded at startup.
#[derive(Clone)]
pub struct AppState {
    /// Attraction, food and transit tables
    pub tables: Arc<ReferenceTables>,

    /// Scoring and trip composition configuration
    pub config: Arc<RecommendConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(tables: ReferenceTables, config: RecommendConfig) -> Self {
        Self {
            tables: Arc::new(tables),
            config: Arc::new(config),
        }
    }
}
