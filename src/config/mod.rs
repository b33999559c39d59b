//! Configuration management
//!
//! Configuration is read from a YAML file, then selected values may be
//! overridden from the environment. Every load path ends in validation.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub insights: InsightsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ServiceError::config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ServiceError::config(format!("Failed to parse config: {}", e)))?;

        config.validate_all()?;
        Ok(config)
    }

    /// Apply environment variable overrides on top of this configuration
    pub fn with_env_overrides(mut self) -> Result<Self> {
        debug!("Applying configuration overrides from environment variables");

        if let Ok(timeout) = env::var("INSIGHTS_TIMEOUT") {
            self.insights.timeout = timeout
                .parse()
                .map_err(|e| ServiceError::config(format!("Invalid INSIGHTS_TIMEOUT: {}", e)))?;
        }
        if let Ok(timeout) = env::var("INSIGHTS_CONNECT_TIMEOUT") {
            self.insights.connect_timeout = timeout.parse().map_err(|e| {
                ServiceError::config(format!("Invalid INSIGHTS_CONNECT_TIMEOUT: {}", e))
            })?;
        }
        if let Ok(user_agent) = env::var("INSIGHTS_USER_AGENT") {
            self.insights.user_agent = user_agent;
        }
        if let Ok(level) = env::var("LOG_LEVEL") {
            self.logging.level = level.parse()?;
        }
        if let Ok(json) = env::var("LOG_JSON") {
            self.logging.json = matches!(json.to_lowercase().as_str(), "1" | "true" | "yes");
        }

        self.validate_all()?;
        Ok(self)
    }

    fn validate_all(&self) -> Result<()> {
        self.insights
            .validate()
            .map_err(|e| ServiceError::config(format!("Insights config error: {}", e)))
    }
}
