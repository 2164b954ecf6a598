//! Identity provider port.
//!
//! Resolves the stable identifier of the current respondent. Submissions are
//! owned by this identifier, and nothing is written without it.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, UserId};

/// Supplies the current respondent's identity.
///
/// # Contract
///
/// Implementations must:
/// - Return the same `UserId` for the same respondent across calls
/// - Return `AuthError::IdentityUnavailable` while no identity is established
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_user(&self) -> Result<UserId, AuthError>;
}
