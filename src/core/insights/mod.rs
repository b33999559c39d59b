//! Insights report retrieval
//!
//! Fetches host reports from an Insights-style HTTP API and turns every
//! outcome into a `(message, status code)` pair that can be returned to the
//! caller as-is.

mod client;
mod fetcher;
mod types;

pub use client::{BasicAuth, ConfigCredentialStore, CredentialStore, InsightsHttpClient};
pub use fetcher::{ReportFetcher, ReportSource, classify_fetch_error, classify_response};
pub use types::{FetchError, RawResponse, ReportMessage, ReportResult};
