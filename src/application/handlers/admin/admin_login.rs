//! AdminLoginHandler - exchanges a passphrase for a reporting console.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::application::handlers::reporting::{ReportingConsole, ReportingError};
use crate::domain::foundation::{AuthError, ErrorCode};
use crate::ports::{AdminAuthorizer, IdentityProvider, SubmissionStore};

/// Command carrying the offered passphrase.
pub struct AdminLoginCommand {
    pub passphrase: SecretString,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminLoginError {
    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Respondent identity unavailable: {0}")]
    IdentityUnavailable(String),

    #[error(transparent)]
    Reporting(#[from] ReportingError),
}

impl AdminLoginError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AdminLoginError::AuthenticationFailed => ErrorCode::AuthenticationFailed,
            AdminLoginError::IdentityUnavailable(_) => ErrorCode::IdentityUnavailable,
            AdminLoginError::Reporting(e) => e.code(),
        }
    }
}

/// Handler for the admin gate in front of the reporting console.
pub struct AdminLoginHandler {
    authorizer: Arc<dyn AdminAuthorizer>,
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn SubmissionStore>,
}

impl AdminLoginHandler {
    pub fn new(
        authorizer: Arc<dyn AdminAuthorizer>,
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn SubmissionStore>,
    ) -> Self {
        Self {
            authorizer,
            identity,
            store,
        }
    }

    /// Authorizes, then opens the console over the current identity's
    /// submissions.
    pub async fn handle(&self, cmd: AdminLoginCommand) -> Result<ReportingConsole, AdminLoginError> {
        let grant = self
            .authorizer
            .authorize(cmd.passphrase.expose_secret())
            .await
            .map_err(|e| match e {
                AuthError::IdentityUnavailable(msg) => AdminLoginError::IdentityUnavailable(msg),
                AuthError::InvalidCredentials | AuthError::NotConfigured => {
                    AdminLoginError::AuthenticationFailed
                }
            })?;

        let owner = self
            .identity
            .current_user()
            .await
            .map_err(|e| AdminLoginError::IdentityUnavailable(e.to_string()))?;

        Ok(ReportingConsole::open(grant, self.store.clone(), owner).await?)
    }
}
