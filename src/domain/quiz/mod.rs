//! Quiz domain module.
//!
//! Forced-choice questionnaire: the question bank, the per-respondent session
//! state machine and the classifier that turns answers into a category code.

mod classifier;
mod errors;
mod letters;
mod phase;
mod question_bank;
mod session;

pub use classifier::{Classifier, LetterTally};
pub use errors::QuizError;
pub use letters::{Axis, TraitLetter};
pub use phase::QuizPhase;
pub use question_bank::{Question, QuestionBank, QuestionOption};
pub use session::{
    AnswerOutcome, QuizProgress, QuizSession, SessionExpired, DEFAULT_INACTIVITY_TIMEOUT,
};
