use std::path::{Path, PathBuf};

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace, warn};

use crate::config::{DashboardConfig, initialize_app_state};
use crate::router::create_router;

/// Command-line values taking precedence over the loaded configuration
#[derive(Debug, Default)]
pub struct ServeOverrides {
    pub bind_address: Option<String>,
    pub api_base_url: Option<String>,
    pub static_dir: Option<PathBuf>,
}

impl ServeOverrides {
    fn apply(self, mut config: DashboardConfig) -> DashboardConfig {
        if let Some(bind_address) = self.bind_address {
            config.bind_address = bind_address;
        }
        if let Some(api_base_url) = self.api_base_url {
            config.api_base_url = api_base_url;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        config
    }
}

pub async fn serve(config_path: Option<&Path>, overrides: ServeOverrides) -> Result<()> {
    trace!("Entering serve function");
    info!("Energy dashboard starting up");

    // Load configuration
    trace!("Loading configuration");
    let config = match DashboardConfig::load(config_path).and_then(|config| overrides.apply(config).validated()) {
        Ok(config) => {
            debug!("Configuration loaded: {:?}", config);
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if !config.static_dir.is_dir() {
        warn!(
            "Static directory {} does not exist; styles and the frontend will not load",
            config.static_dir.display()
        );
    }

    let bind_address = config.bind_address.clone();
    let api_base_url = config.api_base_url().to_string();

    // Initialize application state
    trace!("Initializing application state");
    let state = initialize_app_state(config);

    // Create router
    trace!("Creating application router");
    let app = create_router(state);
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", bind_address);
    trace!("Attempting to bind TCP listener to {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Energy dashboard running on http://{}", bind_address);
    info!("Pages talk to the forecasting API at {}", api_base_url);
    debug!("Server is ready to accept connections");

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let overrides = ServeOverrides {
            api_base_url: Some("https://energy-api.campus.edu".to_string()),
            ..ServeOverrides::default()
        };

        let config = overrides.apply(DashboardConfig::default());

        assert_eq!(config.api_base_url, "https://energy-api.campus.edu");
        assert_eq!(config.bind_address, "0.0.0.0:3000");
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }
}
