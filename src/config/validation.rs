//! Configuration validation

use super::models::*;
use tracing::debug;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for InsightsConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating insights configuration");

        if self.timeout == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }
        if self.connect_timeout == 0 {
            return Err("Connect timeout must be greater than 0".to_string());
        }
        if self.connect_timeout > self.timeout {
            return Err(format!(
                "Connect timeout ({}s) cannot exceed request timeout ({}s)",
                self.connect_timeout, self.timeout
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err("User agent cannot be empty".to_string());
        }

        for (id, credential) in &self.credentials {
            credential
                .validate()
                .map_err(|e| format!("Credential {}: {}", id, e))?;
        }

        Ok(())
    }
}

impl Validate for CredentialConfig {
    fn validate(&self) -> Result<(), String> {
        if self.username.is_empty() {
            return Err("Username cannot be empty".to_string());
        }
        if self.password.is_empty() {
            return Err("Password cannot be empty".to_string());
        }
        Ok(())
    }
}
