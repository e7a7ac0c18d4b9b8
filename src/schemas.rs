use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::DashboardConfig;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Validated configuration the server was started with
    pub config: Arc<DashboardConfig>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Forecasting API the pages are pointed at
    pub api_base_url: String,
}
