//! reqwest-backed report source

use super::fetcher::ReportSource;
use super::types::{FetchError, RawResponse};
use crate::config::{CredentialConfig, InsightsConfig};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, ClientBuilder};
use std::collections::HashMap;
use std::error::Error as StdError;
use std::sync::Arc;
use tracing::debug;

/// Fallback fragments for TLS failures that do not carry a `rustls::Error`
const TLS_MARKERS: &[&str] = &[
    "certificate",
    "tls handshake",
    "handshake failure",
    "unknownissuer",
];

#[derive(Clone)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

/// Resolves a credential id into login details for one actor
pub trait CredentialStore: Send + Sync {
    /// `None` when the credential does not exist or the actor may not use it
    fn basic_auth(&self, credential_id: u64, actor_id: u64) -> Option<BasicAuth>;
}

/// Credentials declared in the `insights.credentials` config section
#[derive(Debug, Clone, Default)]
pub struct ConfigCredentialStore {
    credentials: HashMap<u64, CredentialConfig>,
}

impl ConfigCredentialStore {
    pub fn from_config(config: &InsightsConfig) -> Self {
        Self {
            credentials: config.credentials.clone(),
        }
    }
}

impl CredentialStore for ConfigCredentialStore {
    fn basic_auth(&self, credential_id: u64, actor_id: u64) -> Option<BasicAuth> {
        self.credentials
            .get(&credential_id)
            .filter(|credential| credential.usable_by(actor_id))
            .map(|credential| BasicAuth {
                username: credential.username.clone(),
                password: credential.password.clone(),
            })
    }
}

/// HTTP client for the Insights API
#[derive(Clone)]
pub struct InsightsHttpClient {
    client: Client,
    credentials: Arc<dyn CredentialStore>,
}

impl InsightsHttpClient {
    pub fn new(config: &InsightsConfig, credentials: Arc<dyn CredentialStore>) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(config.timeout_duration())
            .connect_timeout(config.connect_timeout_duration())
            .user_agent(config.user_agent.as_str())
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()?;

        Ok(Self {
            client,
            credentials,
        })
    }

    /// Client whose credentials come from the config itself
    pub fn from_config(config: &InsightsConfig) -> Result<Self> {
        Self::new(config, Arc::new(ConfigCredentialStore::from_config(config)))
    }
}

#[async_trait]
impl ReportSource for InsightsHttpClient {
    async fn fetch_raw(
        &self,
        url: &str,
        credential_id: u64,
        actor_id: u64,
    ) -> std::result::Result<RawResponse, FetchError> {
        let auth = self
            .credentials
            .basic_auth(credential_id, actor_id)
            .ok_or_else(|| {
                FetchError::Transport(format!(
                    "credential {} is not available to user {}",
                    credential_id, actor_id
                ))
            })?;

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .basic_auth(auth.username, Some(auth.password))
            .send()
            .await
            .map_err(classify_reqwest_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify_reqwest_error)?;
        debug!(url, status, bytes = body.len(), "Insights response received");

        Ok(RawResponse { status, body })
    }
}

fn classify_reqwest_error(err: reqwest::Error) -> FetchError {
    if is_tls_failure(&err) {
        FetchError::Tls(err.to_string())
    } else if err.is_timeout() {
        FetchError::Timeout(err.to_string())
    } else {
        FetchError::Transport(err.to_string())
    }
}

/// Walks the causes below `err` looking for a `rustls::Error`. The top-level
/// message embeds the request URL and is never matched against markers.
fn is_tls_failure(err: &dyn StdError) -> bool {
    let mut cause = err.source();
    while let Some(e) = cause {
        if is_rustls_error(e) {
            return true;
        }
        let text = e.to_string().to_lowercase();
        if TLS_MARKERS.iter().any(|marker| text.contains(marker)) {
            return true;
        }
        cause = e.source();
    }
    false
}

/// rustls failures reach reqwest wrapped in an `io::Error`, whose `source()`
/// skips the wrapped value, so the payload is inspected through `get_ref`.
fn is_rustls_error(err: &(dyn StdError + 'static)) -> bool {
    if err.downcast_ref::<rustls::Error>().is_some() {
        return true;
    }
    err.downcast_ref::<std::io::Error>()
        .and_then(|io| io.get_ref())
        .is_some_and(|inner| inner.downcast_ref::<rustls::Error>().is_some())
}
