//! QuizSession - drives one respondent through the questionnaire.
//!
//! # Lifecycle
//!
//! `NotStarted -> InProgress(index) -> Completed`, with `reset` (or inactivity
//! expiry) returning to `NotStarted` from anywhere.
//!
//! # Invariants
//!
//! - the shuffled sequence is drawn once per `start` and never reshuffled
//! - `answers.len() == sequence.len()` while started, 0 otherwise
//! - rejected calls leave index, answers and phase untouched
//!
//! The session is not thread-safe by itself; `QuizRunner` serializes access
//! and runs the inactivity watchdog.

use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use super::classifier::Classifier;
use super::errors::QuizError;
use super::letters::TraitLetter;
use super::phase::QuizPhase;
use super::question_bank::{Question, QuestionBank};
use crate::domain::catalogue::CategoryCode;
use crate::domain::foundation::StateMachine;

/// Default inactivity timeout.
pub const DEFAULT_INACTIVITY_TIMEOUT: Duration = Duration::from_secs(300);

/// Result of a successful `answer` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Moved on to the question at `index`.
    Advanced { index: usize },
    /// Last question answered; the session is complete.
    Completed(CategoryCode),
}

/// Raised when an in-progress session was discarded for inactivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionExpired {
    /// Index the respondent was on when the session expired.
    pub index: usize,
    /// How many answers were recorded and then discarded.
    pub discarded_answers: usize,
    /// How long the session had been idle.
    pub idle_for: Duration,
}

/// Progress snapshot for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub phase: QuizPhase,
    /// 0-based current question index.
    pub index: usize,
    pub answered: usize,
    pub total: usize,
}

/// One respondent's questionnaire run.
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    inactivity_timeout: Duration,
    phase: QuizPhase,
    sequence: Vec<Question>,
    answers: Vec<Option<TraitLetter>>,
    index: usize,
    result: Option<CategoryCode>,
    last_activity: Option<Instant>,
}

impl QuizSession {
    /// Creates a session over `bank`.
    pub fn new(bank: Arc<QuestionBank>, inactivity_timeout: Duration) -> Self {
        Self {
            bank,
            inactivity_timeout,
            phase: QuizPhase::NotStarted,
            sequence: Vec::new(),
            answers: Vec::new(),
            index: 0,
            result: None,
            last_activity: None,
        }
    }

    /// Creates a session over the standard bank with the default timeout.
    pub fn standard() -> Self {
        Self::new(
            Arc::new(QuestionBank::standard().clone()),
            DEFAULT_INACTIVITY_TIMEOUT,
        )
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of questions in a run.
    pub fn total(&self) -> usize {
        self.bank.len()
    }

    /// The shuffled sequence for this run (empty before `start`).
    pub fn sequence(&self) -> &[Question] {
        &self.sequence
    }

    pub fn answers(&self) -> &[Option<TraitLetter>] {
        &self.answers
    }

    /// The question currently shown, while in progress.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::InProgress => self.sequence.get(self.index),
            _ => None,
        }
    }

    /// Category code, once completed.
    pub fn result(&self) -> Option<CategoryCode> {
        self.result
    }

    pub fn inactivity_timeout(&self) -> Duration {
        self.inactivity_timeout
    }

    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            phase: self.phase,
            index: self.index,
            answered: self.answers.iter().filter(|a| a.is_some()).count(),
            total: self.total(),
        }
    }

    /// Instant at which the session expires unless touched again.
    ///
    /// `None` while not in progress: the timer is inert.
    pub fn inactivity_deadline(&self) -> Option<Instant> {
        match (self.phase, self.last_activity) {
            (QuizPhase::InProgress, Some(at)) => Some(at + self.inactivity_timeout),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Starts a run with a fresh random question order.
    pub fn start(&mut self) -> Result<(), QuizError> {
        self.start_with_rng(&mut rand::thread_rng())
    }

    /// Starts a run using the given random source for the shuffle.
    ///
    /// # Errors
    ///
    /// - `AlreadyStarted` unless the session is `NotStarted`
    pub fn start_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), QuizError> {
        let next = self
            .phase
            .transition_to(QuizPhase::InProgress)
            .map_err(|_| QuizError::AlreadyStarted)?;

        let mut sequence = self.bank.questions().to_vec();
        sequence.shuffle(rng);

        self.answers = vec![None; sequence.len()];
        self.sequence = sequence;
        self.index = 0;
        self.result = None;
        self.phase = next;
        self.touch();
        Ok(())
    }

    /// Records `letter` for the current question and advances.
    ///
    /// Answering again after `back` overwrites the earlier choice.
    ///
    /// # Errors
    ///
    /// - `Expired` if the inactivity deadline has already passed (the
    ///   session is reset)
    /// - `NotInProgress` outside `InProgress`
    /// - `LetterNotOffered` if the current question does not offer `letter`
    pub fn answer(&mut self, letter: TraitLetter) -> Result<AnswerOutcome, QuizError> {
        self.ensure_alive()?;
        let question = self.current_question().ok_or(QuizError::NotInProgress)?;
        if !question.offers(letter) {
            return Err(QuizError::LetterNotOffered {
                letter,
                question_id: question.id().to_string(),
            });
        }

        let previous = self.answers[self.index].replace(letter);

        if self.index + 1 < self.sequence.len() {
            self.index += 1;
            self.touch();
            return Ok(AnswerOutcome::Advanced { index: self.index });
        }

        match Classifier::classify(&self.answers) {
            Ok(code) => {
                self.result = Some(code);
                self.phase = QuizPhase::Completed;
                self.last_activity = None;
                Ok(AnswerOutcome::Completed(code))
            }
            Err(err) => {
                self.answers[self.index] = previous;
                Err(err)
            }
        }
    }

    /// Steps back one question, keeping the recorded answers.
    ///
    /// # Errors
    ///
    /// - `Expired` if the inactivity deadline has already passed
    /// - `NotInProgress` outside `InProgress`
    /// - `AtFirstQuestion` at index 0
    pub fn back(&mut self) -> Result<usize, QuizError> {
        self.ensure_alive()?;
        if self.phase != QuizPhase::InProgress {
            return Err(QuizError::NotInProgress);
        }
        if self.index == 0 {
            return Err(QuizError::AtFirstQuestion);
        }
        self.index -= 1;
        self.touch();
        Ok(self.index)
    }

    /// Discards the run and returns to `NotStarted`.
    pub fn reset(&mut self) {
        self.phase = QuizPhase::NotStarted;
        self.sequence.clear();
        self.answers.clear();
        self.index = 0;
        self.result = None;
        self.last_activity = None;
    }

    /// Expires the session if it has been idle past its deadline.
    pub fn expire_if_idle(&mut self) -> Option<SessionExpired> {
        self.expire_if_idle_at(Instant::now())
    }

    /// Same as `expire_if_idle`, against an explicit clock reading.
    pub fn expire_if_idle_at(&mut self, now: Instant) -> Option<SessionExpired> {
        let deadline = self.inactivity_deadline()?;
        if now < deadline {
            return None;
        }

        let expired = SessionExpired {
            index: self.index,
            discarded_answers: self.progress().answered,
            idle_for: self
                .last_activity
                .map(|at| now.saturating_duration_since(at))
                .unwrap_or_default(),
        };
        self.reset();
        Some(expired)
    }

    fn ensure_alive(&mut self) -> Result<(), QuizError> {
        match self.expire_if_idle() {
            Some(_) => Err(QuizError::Expired),
            None => Ok(()),
        }
    }

    fn touch(&mut self) {
        self.last_activity = Some(Instant::now());
    }
}
