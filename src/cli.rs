use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{ServeOverrides, check_config, serve};

#[derive(Parser)]
#[command(name = "energy-dashboard")]
#[command(about = "Campus energy dashboard page server")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML)
    ///
    /// Defaults to ./dashboard.toml when present. Values can be overridden
    /// with DASHBOARD_* environment variables, e.g. DASHBOARD_API_BASE_URL.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long)]
        bind_address: Option<String>,

        /// Origin of the forecasting API the pages talk to
        ///
        /// Examples:
        ///   http://127.0.0.1:8000
        ///   https://energy-api.campus.edu
        #[arg(short, long)]
        api_base_url: Option<String>,

        /// Directory served under /static
        #[arg(short, long)]
        static_dir: Option<PathBuf>,
    },
    /// Load and validate the configuration, then print it
    CheckConfig,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config_path = self.config.as_deref();
        match self.command {
            Commands::Serve { bind_address, api_base_url, static_dir } => {
                let overrides = ServeOverrides { bind_address, api_base_url, static_dir };
                serve(config_path, overrides).await?;
            }
            Commands::CheckConfig => {
                check_config(config_path)?;
            }
        }
        Ok(())
    }
}
