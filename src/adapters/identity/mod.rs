//! Identity provider adapters.
//!
//! - `FixedIdentityProvider` - returns a configured identity, or none
//! - `AnonymousIdentityProvider` - mints one random identity on first use

use async_trait::async_trait;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::domain::foundation::{AuthError, UserId};
use crate::ports::IdentityProvider;

/// Identity provider with a fixed answer.
#[derive(Debug, Clone)]
pub struct FixedIdentityProvider {
    user: Option<UserId>,
}

impl FixedIdentityProvider {
    pub fn new(user: UserId) -> Self {
        Self { user: Some(user) }
    }

    /// A provider that never has an identity (sign-in pending or failed).
    pub fn unavailable() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl IdentityProvider for FixedIdentityProvider {
    async fn current_user(&self) -> Result<UserId, AuthError> {
        self.user
            .clone()
            .ok_or_else(|| AuthError::identity_unavailable("no respondent identity established"))
    }
}

/// Anonymous sign-in: a random identity is created on first request and
/// reused for the lifetime of the provider.
#[derive(Debug, Default)]
pub struct AnonymousIdentityProvider {
    user: OnceCell<UserId>,
}

impl AnonymousIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityProvider for AnonymousIdentityProvider {
    async fn current_user(&self) -> Result<UserId, AuthError> {
        let user = self
            .user
            .get_or_try_init(|| async {
                let user = UserId::new(format!("anon-{}", Uuid::new_v4().simple()))
                    .map_err(|e| AuthError::identity_unavailable(e.to_string()))?;
                tracing::info!(user_id = %user, "Anonymous identity established");
                Ok::<_, AuthError>(user)
            })
            .await?;
        Ok(user.clone())
    }
}
