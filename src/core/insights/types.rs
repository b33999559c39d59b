//! Insights report types

use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

/// Status line and body of an HTTP response, before interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn parse_json(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.body)
    }
}

/// Why an outbound request produced no response
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// TLS negotiation or certificate verification failed
    #[error("{0}")]
    Tls(String),
    #[error("{0}")]
    Timeout(String),
    /// Any other transport failure
    #[error("{0}")]
    Transport(String),
}

/// Body of a report response: the report itself or an error wrapper
#[derive(Debug, Clone, PartialEq)]
pub enum ReportMessage {
    Report(Value),
    Error(String),
}

impl Serialize for ReportMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ReportMessage::Report(value) => value.serialize(serializer),
            ReportMessage::Error(error) => serde_json::json!({ "error": error }).serialize(serializer),
        }
    }
}

/// Normalized result of a report fetch, ready to become an HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct ReportResult {
    pub message: ReportMessage,
    pub status_code: u16,
}

impl ReportResult {
    pub fn report(body: Value, status_code: u16) -> Self {
        Self {
            message: ReportMessage::Report(body),
            status_code,
        }
    }

    pub fn error(status_code: u16, error: impl Into<String>) -> Self {
        Self {
            message: ReportMessage::Error(error.into()),
            status_code,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.message, ReportMessage::Error(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.message {
            ReportMessage::Error(error) => Some(error),
            ReportMessage::Report(_) => None,
        }
    }
}
