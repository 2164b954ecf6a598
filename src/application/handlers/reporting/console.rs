//! ReportingConsole - live, owner-scoped view over stored submissions.
//!
//! The console loads the owner's full set once and then follows the
//! store's change feed. Readers always work on an `Arc` snapshot; every
//! change swaps in a new vector, so a view is never torn by a concurrent
//! update.

use std::sync::{Arc, PoisonError, RwLock};

use futures::StreamExt;
use serde::Serialize;
use tokio::sync::watch;

use super::errors::ReportingError;
use crate::domain::foundation::{AdminGrant, UserId};
use crate::domain::reporting::{
    from_structured, to_delimited, to_structured, AggregateReport, SortOrder, SubmissionQuery,
};
use crate::domain::submission::{Submission, SubmissionChange};
use crate::ports::SubmissionStore;

/// Outcome of a structured import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Submissions written to the store.
    pub imported: usize,
    /// Submissions already present and left alone.
    pub skipped: usize,
}

/// Admin view over one owner's submissions.
pub struct ReportingConsole {
    store: Arc<dyn SubmissionStore>,
    owner: UserId,
    grant: AdminGrant,
    snapshot: RwLock<Arc<Vec<Submission>>>,
}

impl ReportingConsole {
    /// Opens the console and loads the owner's submissions.
    ///
    /// Requires an `AdminGrant`, obtainable only from an `AdminAuthorizer`.
    pub async fn open(
        grant: AdminGrant,
        store: Arc<dyn SubmissionStore>,
        owner: UserId,
    ) -> Result<Self, ReportingError> {
        let submissions = store.list_all(&owner).await?;
        tracing::info!(
            user_id = %owner,
            count = submissions.len(),
            "Reporting console opened"
        );

        Ok(Self {
            store,
            owner,
            grant,
            snapshot: RwLock::new(Arc::new(submissions)),
        })
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    pub fn grant(&self) -> &AdminGrant {
        &self.grant
    }

    /// Current full set, in arrival order.
    pub fn snapshot(&self) -> Arc<Vec<Submission>> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Filtered and sorted view.
    pub fn view(&self, query: &SubmissionQuery, order: SortOrder) -> Vec<Submission> {
        let snapshot = self.snapshot();
        let mut items: Vec<Submission> = snapshot
            .iter()
            .filter(|s| query.matches(s))
            .cloned()
            .collect();
        order.sort(&mut items);
        items
    }

    /// Count tables over the full current set, ignoring any filter.
    pub fn aggregate(&self) -> AggregateReport {
        AggregateReport::compute(self.snapshot().iter())
    }

    /// CSV of the filtered and sorted view.
    pub fn export_delimited(&self, query: &SubmissionQuery, order: SortOrder) -> String {
        to_delimited(&self.view(query, order))
    }

    /// Pretty JSON of the entire unfiltered set.
    pub fn export_structured(&self) -> Result<String, ReportingError> {
        Ok(to_structured(&self.snapshot())?)
    }

    /// Restores a structured export into the store.
    ///
    /// The payload is parsed in full before anything is written. Submissions
    /// whose id is already present are skipped.
    pub async fn import_structured(&self, payload: &str) -> Result<ImportSummary, ReportingError> {
        let incoming = from_structured(payload)?;
        let mut summary = ImportSummary::default();

        for submission in incoming {
            if self.contains(&submission) {
                summary.skipped += 1;
                continue;
            }
            self.store.create(&self.owner, &submission).await?;
            self.insert_if_absent(submission);
            summary.imported += 1;
        }

        tracing::info!(
            user_id = %self.owner,
            imported = summary.imported,
            skipped = summary.skipped,
            "Structured import finished"
        );
        Ok(summary)
    }

    /// Deletes every submission of the owner, then clears the local set.
    ///
    /// A failed delete leaves the local set untouched.
    pub async fn reset_all(&self) -> Result<usize, ReportingError> {
        let removed = self.store.delete_all(&self.owner).await.map_err(|e| {
            tracing::error!(user_id = %self.owner, error = %e, "Reset failed");
            ReportingError::from(e)
        })?;

        self.replace(Vec::new());
        tracing::warn!(user_id = %self.owner, removed, "All submissions reset");
        Ok(removed)
    }

    /// Applies one change from the store's feed.
    pub async fn apply(&self, change: SubmissionChange) -> Result<(), ReportingError> {
        match change {
            SubmissionChange::Created(submission) => {
                self.insert_if_absent(submission);
            }
            SubmissionChange::Cleared => self.replace(Vec::new()),
            SubmissionChange::Resync => self.reload().await?,
        }
        Ok(())
    }

    /// Reloads the full set from the store.
    pub async fn reload(&self) -> Result<(), ReportingError> {
        let submissions = self.store.list_all(&self.owner).await?;
        tracing::debug!(user_id = %self.owner, count = submissions.len(), "Reloaded submissions");
        self.replace(submissions);
        Ok(())
    }

    /// Follows the owner's change feed until shutdown or until the feed ends.
    ///
    /// A failed resync is logged and retried on the next change.
    pub async fn run_feed(&self, mut shutdown: watch::Receiver<bool>) -> Result<(), ReportingError> {
        let mut feed = self.store.watch(&self.owner).await?;

        // Changes between the initial load and the subscription are missed.
        self.reload().await?;

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        return Ok(());
                    }
                }

                next = feed.next() => {
                    let Some(change) = next else {
                        tracing::debug!(user_id = %self.owner, "Change feed ended");
                        return Ok(());
                    };
                    let kind = change.kind();
                    if let Err(e) = self.apply(change).await {
                        tracing::warn!(user_id = %self.owner, kind, error = %e, "Failed to apply change");
                    }
                }
            }
        }
    }

    fn contains(&self, submission: &Submission) -> bool {
        self.snapshot()
            .iter()
            .any(|s| s.submission_id() == submission.submission_id())
    }

    fn insert_if_absent(&self, submission: Submission) {
        let mut guard = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        if guard
            .iter()
            .any(|s| s.submission_id() == submission.submission_id())
        {
            return;
        }
        let mut next = Vec::with_capacity(guard.len() + 1);
        next.extend(guard.iter().cloned());
        next.push(submission);
        *guard = Arc::new(next);
    }

    fn replace(&self, submissions: Vec<Submission>) {
        *self.snapshot.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(submissions);
    }
}
