//! In-memory submission store.
//!
//! Keeps every owner's submissions in a map. Useful for tests and for
//! running without a data directory.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::feed::ChangeFeedHub;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::submission::{Submission, SubmissionChange};
use crate::ports::{SubmissionFeed, SubmissionStore};

/// In-memory storage for submissions.
#[derive(Default)]
pub struct InMemorySubmissionStore {
    submissions: RwLock<HashMap<UserId, Vec<Submission>>>,
    feed: ChangeFeedHub,
}

impl InMemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionStore for InMemorySubmissionStore {
    async fn create(&self, owner: &UserId, submission: &Submission) -> Result<(), DomainError> {
        let mut submissions = self.submissions.write().await;
        let owned = submissions.entry(owner.clone()).or_default();
        if owned
            .iter()
            .any(|s| s.submission_id() == submission.submission_id())
        {
            return Err(DomainError::persistence(format!(
                "submission {} already exists",
                submission.submission_id()
            )));
        }
        owned.push(submission.clone());

        // Published under the write guard so feed order matches store order.
        self.feed
            .publish(owner, SubmissionChange::Created(submission.clone()))
            .await;
        Ok(())
    }

    async fn list_all(&self, owner: &UserId) -> Result<Vec<Submission>, DomainError> {
        let submissions = self.submissions.read().await;
        Ok(submissions.get(owner).cloned().unwrap_or_default())
    }

    async fn delete_all(&self, owner: &UserId) -> Result<usize, DomainError> {
        let mut submissions = self.submissions.write().await;
        let removed = submissions.remove(owner).map(|v| v.len()).unwrap_or(0);

        self.feed.publish(owner, SubmissionChange::Cleared).await;
        Ok(removed)
    }

    async fn watch(&self, owner: &UserId) -> Result<SubmissionFeed, DomainError> {
        Ok(self.feed.subscribe(owner).await)
    }
}
