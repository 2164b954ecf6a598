//! Quiz-specific error types.

use thiserror::Error;

use super::letters::TraitLetter;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Rejected quiz operations. None of them modify the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("Quiz has already been started")]
    AlreadyStarted,

    #[error("Quiz is not in progress")]
    NotInProgress,

    #[error("Already at the first question")]
    AtFirstQuestion,

    #[error("Letter {letter} is not an option of question {question_id}")]
    LetterNotOffered {
        letter: TraitLetter,
        question_id: String,
    },

    #[error("Answer {index} is not set")]
    IncompleteAnswers { index: usize },

    #[error("Quiz session expired after inactivity")]
    Expired,
}

impl QuizError {
    pub fn code(&self) -> ErrorCode {
        match self {
            QuizError::AlreadyStarted
            | QuizError::NotInProgress
            | QuizError::AtFirstQuestion
            | QuizError::Expired => ErrorCode::InvalidStateTransition,
            QuizError::LetterNotOffered { .. } => ErrorCode::ValidationFailed,
            QuizError::IncompleteAnswers { .. } => ErrorCode::IncompleteAnswers,
        }
    }
}

impl From<QuizError> for DomainError {
    fn from(err: QuizError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
