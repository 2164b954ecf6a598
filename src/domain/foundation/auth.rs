//! Identity and administrative access types.
//!
//! The respondent identity is an opaque `UserId` handed out by whatever
//! identity provider is plugged in. Administrative access is represented by
//! an `AdminGrant`, which only an `AdminAuthorizer` can mint.

use super::Timestamp;
use thiserror::Error;

/// Errors raised while resolving identity or authorizing an administrator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No stable respondent identifier is available yet.
    #[error("Identity unavailable: {0}")]
    IdentityUnavailable(String),

    /// The offered administrator credential did not match.
    #[error("Authentication failed")]
    InvalidCredentials,

    /// No administrator credential has been configured.
    #[error("Administrative access is not configured")]
    NotConfigured,
}

impl AuthError {
    /// Creates an identity unavailable error with a message.
    pub fn identity_unavailable(message: impl Into<String>) -> Self {
        Self::IdentityUnavailable(message.into())
    }
}

/// Proof that an administrator passed the authorization check.
///
/// Constructed only inside the crate so that reporting operations cannot be
/// reached without going through an authorizer.
#[derive(Debug, Clone)]
pub struct AdminGrant {
    granted_at: Timestamp,
}

impl AdminGrant {
    pub(crate) fn issue() -> Self {
        Self {
            granted_at: Timestamp::now(),
        }
    }

    /// When the grant was issued.
    pub fn granted_at(&self) -> &Timestamp {
        &self.granted_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_unavailable_displays_reason() {
        let err = AuthError::identity_unavailable("not signed in");
        assert_eq!(err.to_string(), "Identity unavailable: not signed in");
    }

    #[test]
    fn grant_records_issue_time() {
        let before = Timestamp::now();
        let grant = AdminGrant::issue();
        assert!(*grant.granted_at() >= before);
    }
}
