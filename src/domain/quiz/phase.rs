//! QuizPhase - coarse lifecycle of a quiz session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Coarse lifecycle state; the current index lives on the session itself.
///
/// Valid transitions:
/// - NotStarted -> InProgress (start)
/// - InProgress -> Completed (last answer)
/// - InProgress | Completed -> NotStarted (reset or inactivity expiry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl StateMachine for QuizPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use QuizPhase::*;
        matches!(
            (self, target),
            (NotStarted, InProgress)
                | (InProgress, Completed)
                | (InProgress, NotStarted)
                | (Completed, NotStarted)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use QuizPhase::*;
        match self {
            NotStarted => vec![InProgress],
            InProgress => vec![Completed, NotStarted],
            Completed => vec![NotStarted],
        }
    }
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuizPhase::NotStarted => "not_started",
            QuizPhase::InProgress => "in_progress",
            QuizPhase::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}
