//! Admin access configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Admin passphrase configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Passphrase guarding the reporting console; unset disables admin access
    pub passphrase: Option<SecretString>,

    /// Minimum accepted passphrase length
    #[serde(default = "default_min_passphrase_length")]
    pub min_passphrase_length: usize,
}

impl AdminConfig {
    /// Check if a non-blank passphrase is configured
    pub fn is_enabled(&self) -> bool {
        self.passphrase
            .as_ref()
            .is_some_and(|p| !p.expose_secret().trim().is_empty())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(passphrase) = &self.passphrase {
            if passphrase.expose_secret().chars().count() < self.min_passphrase_length {
                return Err(ValidationError::PassphraseTooShort(
                    self.min_passphrase_length,
                ));
            }
        }
        Ok(())
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            passphrase: None,
            min_passphrase_length: default_min_passphrase_length(),
        }
    }
}

fn default_min_passphrase_length() -> usize {
    8
}
