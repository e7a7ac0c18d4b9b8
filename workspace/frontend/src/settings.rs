use log::Level;

use crate::storage::KeyValueStore;

/// localStorage key overriding the API base URL.
pub const API_BASE_URL_KEY: &str = "dashboard_api_base_url";
/// localStorage key overriding the console log level.
pub const LOG_LEVEL_KEY: &str = "dashboard_log_level";

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Global frontend settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Forecasting API origin, without the `/api/v1` prefix
    pub api_base_url: String,

    /// Console log level
    pub log_level: Level,

    /// How long the body keeps its `preload` class after the sidebar state is applied
    pub preload_grace_ms: u32,

    /// Interval between report progress animation frames
    pub progress_tick_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: Level::Info,
            preload_grace_ms: 10,
            progress_tick_ms: 50,
        }
    }
}

impl AppSettings {
    /// Resolve settings from what the page and storage provide.
    ///
    /// Precedence for the API base URL: localStorage override, then the
    /// `data-api-base` attribute the server rendered, then the default.
    pub fn resolve(hostname: Option<&str>, api_base_attr: Option<&str>, store: &dyn KeyValueStore) -> Self {
        let mut settings = Self::default();

        if matches!(hostname, Some("localhost" | "127.0.0.1")) {
            settings.log_level = Level::Debug;
        }

        if let Some(base) = api_base_attr.filter(|b| !b.trim().is_empty()) {
            settings.api_base_url = base.trim().to_string();
        }

        if let Some(base) = store.get_item(API_BASE_URL_KEY).filter(|b| !b.trim().is_empty()) {
            settings.api_base_url = base.trim().to_string();
        }

        if let Some(level) = store.get_item(LOG_LEVEL_KEY) {
            settings.log_level = parse_level(&level).unwrap_or(settings.log_level);
        }

        settings.api_base_url = settings.api_base_url.trim_end_matches('/').to_string();
        settings
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}
