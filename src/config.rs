use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::schemas::AppState;

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";
/// Prefix of environment variables overriding file values, e.g. `DASHBOARD_BIND_ADDRESS`.
pub const ENV_PREFIX: &str = "DASHBOARD";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

/// Page server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DashboardConfig {
    /// Address the page server listens on (IP:PORT)
    pub bind_address: String,

    /// Origin of the forecasting API, rendered into every page for the frontend
    #[validate(url)]
    pub api_base_url: String,

    /// Directory served under `/static` (CSS and the compiled frontend)
    pub static_dir: PathBuf,

    /// Upper bound on handling one request
    #[validate(range(min = 1, max = 300))]
    pub request_timeout_secs: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            api_base_url: "http://127.0.0.1:8000".to_string(),
            static_dir: PathBuf::from("static"),
            request_timeout_secs: 30,
        }
    }
}

impl DashboardConfig {
    /// Load defaults, then the config file (if present), then `DASHBOARD_*`
    /// environment variables, and validate the result.
    ///
    /// An explicitly named file must exist; the default one is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config: Self = Config::builder()
            .set_default("bind_address", defaults.bind_address)?
            .set_default("api_base_url", defaults.api_base_url)?
            .set_default("static_dir", defaults.static_dir.to_string_lossy().to_string())?
            .set_default("request_timeout_secs", defaults.request_timeout_secs)?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validated()
    }

    /// Check field constraints, returning the config unchanged when valid.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// The API base URL as the frontend expects it, without a trailing slash.
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

/// Initialize application state from a loaded configuration
pub fn initialize_app_state(config: DashboardConfig) -> AppState {
    tracing::debug!(?config, "Initializing application state");
    AppState {
        config: Arc::new(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("energy-dashboard-{}-{}.toml", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = DashboardConfig::default().validated().unwrap();
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.api_base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_file_values_override_defaults() {
        let path = temp_config(
            "override",
            "api_base_url = \"https://energy-api.campus.edu/\"\nrequest_timeout_secs = 10\n",
        );

        let config = DashboardConfig::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.api_base_url(), "https://energy-api.campus.edu");
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.bind_address, "0.0.0.0:3000");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("energy-dashboard-does-not-exist.toml");
        assert!(matches!(DashboardConfig::load(Some(&path)), Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let config = DashboardConfig {
            api_base_url: "not a url".to_string(),
            ..DashboardConfig::default()
        };
        assert!(matches!(config.validated(), Err(ConfigError::Invalid(_))));

        let config = DashboardConfig {
            request_timeout_secs: 0,
            ..DashboardConfig::default()
        };
        assert!(matches!(config.validated(), Err(ConfigError::Invalid(_))));
    }
}
