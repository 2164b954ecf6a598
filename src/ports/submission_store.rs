//! Submission store port.
//!
//! Defines the contract for persisting submissions per respondent and for
//! observing changes to one respondent's set.
//!
//! # Design
//!
//! - **Owner-scoped**: every operation is keyed by the owning `UserId`
//! - **Append-only**: submissions are created once and only deleted in bulk
//! - **Observable**: `watch` yields a change feed for live views

use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::submission::{Submission, SubmissionChange};

/// Stream of changes to one owner's submissions.
pub type SubmissionFeed = Pin<Box<dyn Stream<Item = SubmissionChange> + Send>>;

/// Repository port for submissions.
///
/// Implementations must ensure:
/// - a failed write leaves the stored set unchanged
/// - every successful write is announced on the owner's feed
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Store a new submission for `owner`.
    ///
    /// # Errors
    ///
    /// - `PersistenceFailed` on storage failure or a duplicate id
    async fn create(&self, owner: &UserId, submission: &Submission) -> Result<(), DomainError>;

    /// All submissions of `owner`, in creation order.
    async fn list_all(&self, owner: &UserId) -> Result<Vec<Submission>, DomainError>;

    /// Delete every submission of `owner` in one operation.
    ///
    /// Returns the number of removed submissions.
    async fn delete_all(&self, owner: &UserId) -> Result<usize, DomainError>;

    /// Subscribe to changes of `owner`'s submissions.
    ///
    /// Subscribers that fall behind receive `SubmissionChange::Resync`
    /// and are expected to reload with `list_all`.
    async fn watch(&self, owner: &UserId) -> Result<SubmissionFeed, DomainError>;
}
