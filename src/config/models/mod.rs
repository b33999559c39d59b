//! Configuration data models
//!
//! This module defines all configuration structures used by the crate.

pub mod insights;
pub mod logging;

pub use insights::*;
pub use logging::*;

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default connect timeout in seconds
pub fn default_connect_timeout() -> u64 {
    10
}

/// Default user agent sent to the Insights API
pub fn default_user_agent() -> String {
    format!("inventory-ops/{} Insights", env!("CARGO_PKG_VERSION"))
}

pub fn default_true() -> bool {
    true
}
