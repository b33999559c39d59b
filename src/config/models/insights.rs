//! Insights client configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Configuration for the outbound Insights report client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsConfig {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    /// User agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Verify the server certificate chain
    #[serde(default = "default_true")]
    pub verify_tls: bool,
    /// Basic-auth credentials keyed by credential id
    #[serde(default)]
    pub credentials: HashMap<u64, CredentialConfig>,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
            user_agent: default_user_agent(),
            verify_tls: true,
            credentials: HashMap::new(),
        }
    }
}

impl InsightsConfig {
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn connect_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }
}

/// A username/password pair used against the Insights API
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialConfig {
    pub username: String,
    pub password: String,
    /// Actors allowed to use this credential. Empty means any actor.
    #[serde(default)]
    pub actors: Vec<u64>,
}

impl CredentialConfig {
    pub fn usable_by(&self, actor_id: u64) -> bool {
        self.actors.is_empty() || self.actors.contains(&actor_id)
    }
}

impl std::fmt::Debug for CredentialConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialConfig")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("actors", &self.actors)
            .finish()
    }
}
