//! Passphrase authorizer.
//!
//! Compares an offered passphrase against a configured secret in constant
//! time. The secret is held as a `SecretString` and never logged. A blank
//! secret counts as unconfigured.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use crate::config::AdminConfig;
use crate::domain::foundation::{AdminGrant, AuthError};
use crate::ports::AdminAuthorizer;

/// Grants admin access to whoever knows the configured passphrase.
pub struct PassphraseAuthorizer {
    secret: Option<SecretString>,
}

impl PassphraseAuthorizer {
    pub fn new(secret: SecretString) -> Self {
        Self::from_config(Some(secret))
    }

    /// Build from optional configuration; `None` or a blank secret rejects
    /// every attempt.
    pub fn from_config(secret: Option<SecretString>) -> Self {
        let secret = secret.filter(|s| !s.expose_secret().trim().is_empty());
        Self { secret }
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }
}

impl From<&AdminConfig> for PassphraseAuthorizer {
    fn from(config: &AdminConfig) -> Self {
        Self::from_config(config.passphrase.clone())
    }
}

impl std::fmt::Debug for PassphraseAuthorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PassphraseAuthorizer")
            .field("configured", &self.is_configured())
            .finish()
    }
}

#[async_trait]
impl AdminAuthorizer for PassphraseAuthorizer {
    async fn authorize(&self, passphrase: &str) -> Result<AdminGrant, AuthError> {
        let Some(secret) = &self.secret else {
            tracing::warn!("Admin login attempted but no passphrase is configured");
            return Err(AuthError::NotConfigured);
        };

        let expected = secret.expose_secret().as_bytes();
        if expected.ct_eq(passphrase.as_bytes()).unwrap_u8() != 1 {
            tracing::warn!("Admin login failed: passphrase mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!("Admin login succeeded");
        Ok(AdminGrant::issue())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authorizer() -> PassphraseAuthorizer {
        PassphraseAuthorizer::new(SecretString::new("correct horse".to_string()))
    }

    #[tokio::test]
    async fn matching_passphrase_yields_grant() {
        assert!(authorizer().authorize("correct horse").await.is_ok());
    }

    #[tokio::test]
    async fn wrong_passphrase_is_rejected() {
        let err = authorizer().authorize("correct horsE").await.unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[tokio::test]
    async fn prefix_of_secret_is_rejected() {
        let err = authorizer().authorize("correct").await.unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[tokio::test]
    async fn unconfigured_authorizer_rejects_everything() {
        let authorizer = PassphraseAuthorizer::from_config(None);
        assert_eq!(authorizer.authorize("").await.unwrap_err(), AuthError::NotConfigured);
        assert_eq!(
            authorizer.authorize("anything").await.unwrap_err(),
            AuthError::NotConfigured
        );
    }

    #[tokio::test]
    async fn blank_secret_counts_as_unconfigured() {
        for blank in ["", "   ", "\t\n"] {
            let authorizer =
                PassphraseAuthorizer::from_config(Some(SecretString::new(blank.to_string())));
            assert!(!authorizer.is_configured());
            assert_eq!(authorizer.authorize(blank).await.unwrap_err(), AuthError::NotConfigured);
        }
    }

    #[tokio::test]
    async fn empty_configured_passphrase_never_grants_access() {
        let config = AdminConfig {
            passphrase: Some(SecretString::new(String::new())),
            min_passphrase_length: 0,
        };
        assert!(config.validate().is_ok());
        assert!(!config.is_enabled());

        let authorizer = PassphraseAuthorizer::from(&config);
        assert_eq!(authorizer.is_configured(), config.is_enabled());
        assert_eq!(authorizer.authorize("").await.unwrap_err(), AuthError::NotConfigured);
    }

    #[tokio::test]
    async fn configured_passphrase_from_config_grants_access() {
        let config = AdminConfig {
            passphrase: Some(SecretString::new("correct horse".to_string())),
            ..AdminConfig::default()
        };
        let authorizer = PassphraseAuthorizer::from(&config);
        assert!(authorizer.authorize("correct horse").await.is_ok());
    }

    #[test]
    fn debug_does_not_leak_the_secret() {
        let rendered = format!("{:?}", authorizer());
        assert!(!rendered.contains("horse"));
    }
}
