use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

/// Runtime settings for the controller. Everything comes from environment
/// variables with sensible local-development defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the extraction service, no trailing slash.
    pub base_url: String,
    /// Directory downloaded metadata artifacts are saved into.
    pub download_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let base_url = env::var("PARSE_BASE_URL").unwrap_or_else(|_| {
            info!("PARSE_BASE_URL not set, using default: http://127.0.0.1:5000");
            "http://127.0.0.1:5000".to_string()
        });

        let download_dir: PathBuf = Self::parse_env_var("DOWNLOAD_DIR", PathBuf::from("."))
            .context("Failed to parse DOWNLOAD_DIR")?;

        let config = Config {
            base_url: base_url.trim_end_matches('/').to_string(),
            download_dir,
        };

        config.validate()?;

        info!("Configuration loaded successfully: {:?}", config);
        Ok(config)
    }

    fn parse_env_var<T>(var_name: &str, default: T) -> Result<T>
    where
        T: std::str::FromStr + Clone + std::fmt::Debug,
        T::Err: std::fmt::Display,
    {
        match env::var(var_name) {
            Ok(val) => match val.parse() {
                Ok(parsed) => Ok(parsed),
                Err(e) => {
                    warn!("Failed to parse {}: {} (using default: {:?})", var_name, e, default);
                    Ok(default)
                }
            },
            Err(_) => {
                info!("{} not set, using default: {:?}", var_name, default);
                Ok(default)
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(anyhow::anyhow!("PARSE_BASE_URL must not be empty"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(anyhow::anyhow!("PARSE_BASE_URL must be an http(s) URL"));
        }
        Ok(())
    }
}
