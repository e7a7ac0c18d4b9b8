use std::path::Path;

use anyhow::Result;
use tracing::{error, info};

use crate::config::DashboardConfig;

pub fn check_config(path: Option<&Path>) -> Result<()> {
    let config = match DashboardConfig::load(path) {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration is invalid: {}", e);
            return Err(e.into());
        }
    };

    info!("Configuration is valid");
    println!("bind_address         = {}", config.bind_address);
    println!("api_base_url         = {}", config.api_base_url());
    println!("static_dir           = {}", config.static_dir.display());
    println!("request_timeout_secs = {}", config.request_timeout_secs);
    Ok(())
}
