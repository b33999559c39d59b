//! Report retrieval with failure normalization
//!
//! Every way a fetch can go wrong maps to exactly one `(status, message)`
//! shape. Nothing from the transport or the JSON parser leaks past
//! [`ReportFetcher::get_insights`].

use super::types::{FetchError, RawResponse, ReportResult};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Outbound GET against the report service
#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn fetch_raw(
        &self,
        url: &str,
        credential_id: u64,
        actor_id: u64,
    ) -> Result<RawResponse, FetchError>;
}

#[derive(Clone)]
pub struct ReportFetcher {
    source: Arc<dyn ReportSource>,
}

impl ReportFetcher {
    pub fn new(source: Arc<dyn ReportSource>) -> Self {
        Self { source }
    }

    /// Fetch the report at `url`. Single attempt, no retries.
    pub async fn get_insights(
        &self,
        url: &str,
        credential_id: u64,
        actor_id: u64,
    ) -> ReportResult {
        debug!(url, credential_id, actor_id, "Fetching Insights report");

        match self.source.fetch_raw(url, credential_id, actor_id).await {
            Ok(response) => classify_response(url, &response),
            Err(e) => classify_fetch_error(url, &e),
        }
    }
}

/// Map a transport failure to its user-facing result
pub fn classify_fetch_error(url: &str, err: &FetchError) -> ReportResult {
    warn!(url, error = %err, "Insights request failed");

    match err {
        FetchError::Tls(_) => {
            ReportResult::error(500, format!("SSLError while trying to connect to {}", url))
        }
        FetchError::Timeout(_) => ReportResult::error(504, format!("Request to {} timed out.", url)),
        FetchError::Transport(text) => ReportResult::error(
            500,
            format!("Unkown exception {} while trying to GET {}", text, url),
        ),
    }
}

/// Map a received response to its user-facing result
pub fn classify_response(url: &str, response: &RawResponse) -> ReportResult {
    if !response.is_success() {
        warn!(url, status = response.status, "Insights responded with an error status");
        return ReportResult::error(
            500,
            format!(
                "Failed to gather reports and maintenance plans from Insights API. \
                 Server responded with {} status code and message {}",
                response.status, response.body
            ),
        );
    }

    match response.parse_json() {
        Ok(body) => ReportResult::report(body, response.status),
        Err(e) => {
            warn!(url, error = %e, "Insights response is not JSON");
            ReportResult::error(
                500,
                format!(
                    "Expected JSON response from Insights but instead got {}",
                    response.body
                ),
            )
        }
    }
}
