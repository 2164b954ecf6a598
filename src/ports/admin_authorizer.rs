//! Admin authorizer port.
//!
//! Exchanges an offered credential for an `AdminGrant`. The grant is the
//! only way into the reporting console.

use async_trait::async_trait;

use crate::domain::foundation::{AdminGrant, AuthError};

/// Checks administrator credentials.
///
/// # Contract
///
/// - `Ok(AdminGrant)` when the passphrase matches the configured secret
/// - `Err(AuthError::InvalidCredentials)` on mismatch
/// - `Err(AuthError::NotConfigured)` when no secret is configured
#[async_trait]
pub trait AdminAuthorizer: Send + Sync {
    async fn authorize(&self, passphrase: &str) -> Result<AdminGrant, AuthError>;
}
