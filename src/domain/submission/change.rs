//! Change events delivered on a store's per-owner feed.

use super::Submission;

/// One change to an owner's submission set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionChange {
    /// A submission was stored.
    Created(Submission),
    /// Every submission of the owner was deleted.
    Cleared,
    /// The subscriber missed events and must reload from the store.
    Resync,
}

impl SubmissionChange {
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionChange::Created(_) => "created",
            SubmissionChange::Cleared => "cleared",
            SubmissionChange::Resync => "resync",
        }
    }
}
