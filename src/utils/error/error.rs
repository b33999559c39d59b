//! Error handling for inventory operations
//!
//! This module defines the crate-wide error type. Per-source rejections and
//! classified report failures are *data* and never surface through it.

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The job scheduler refused or failed to start an update
    #[error("Scheduler error: {0}")]
    Scheduler(String),
}

impl ServiceError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn scheduler(message: impl Into<String>) -> Self {
        Self::Scheduler(message.into())
    }
}

impl ResponseError for ServiceError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code) = match self {
            ServiceError::Config(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
            ),
            ServiceError::Io(_) | ServiceError::Yaml(_) | ServiceError::Serialization(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
            ),
            ServiceError::HttpClient(_) => {
                (actix_web::http::StatusCode::BAD_GATEWAY, "HTTP_CLIENT_ERROR")
            }
            ServiceError::Scheduler(_) => (
                actix_web::http::StatusCode::SERVICE_UNAVAILABLE,
                "SCHEDULER_UNAVAILABLE",
            ),
        };

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
            }
        }))
    }
}
