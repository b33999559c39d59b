//! Logging configuration

use crate::utils::logging::LogLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level; `RUST_LOG` takes precedence when set
    #[serde(default)]
    pub level: LogLevel,
    /// Emit JSON lines instead of the human-readable format
    #[serde(default)]
    pub json: bool,
}
