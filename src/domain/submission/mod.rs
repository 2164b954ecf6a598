//! Submission module - persisted results and their change events.

mod aggregate;
mod change;

pub use aggregate::Submission;
pub use change::SubmissionChange;
