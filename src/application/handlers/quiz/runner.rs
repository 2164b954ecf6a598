//! QuizRunner - owns one quiz session and its inactivity watchdog.
//!
//! Every user action goes through the runner, which serializes it with the
//! watchdog under a single mutex. The watchdog sleeps until the session's
//! inactivity deadline; each action rearms it. When the deadline fires the
//! watchdog re-checks it under the lock, so an action that got in first
//! always wins.
//!
//! ## Graceful Shutdown
//!
//! The watchdog listens on a `watch` channel. `shutdown` signals it and
//! waits for the task to finish; dropping the runner only signals.

use std::sync::Arc;

use tokio::sync::{mpsc, watch, Mutex, Notify};
use tokio::task::JoinHandle;
use tokio::time;

use crate::domain::catalogue::CategoryCode;
use crate::domain::quiz::{
    AnswerOutcome, Question, QuizError, QuizProgress, QuizSession, SessionExpired, TraitLetter,
};

/// Capacity of the expiry notification channel.
const EXPIRY_CHANNEL_CAPACITY: usize = 8;

/// Serialized access to a `QuizSession` plus its inactivity watchdog.
pub struct QuizRunner {
    session: Arc<Mutex<QuizSession>>,
    rearm: Arc<Notify>,
    expired_tx: mpsc::Sender<SessionExpired>,
    shutdown_tx: watch::Sender<bool>,
    watchdog: Option<JoinHandle<()>>,
}

impl QuizRunner {
    /// Wraps `session` and spawns its watchdog on the current runtime.
    ///
    /// Returns the runner and the receiver of expiry notifications.
    pub fn spawn(session: QuizSession) -> (Self, mpsc::Receiver<SessionExpired>) {
        let session = Arc::new(Mutex::new(session));
        let rearm = Arc::new(Notify::new());
        let (expired_tx, expired_rx) = mpsc::channel(EXPIRY_CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let watchdog = tokio::spawn(run_watchdog(
            session.clone(),
            rearm.clone(),
            expired_tx.clone(),
            shutdown_rx,
        ));

        let runner = Self {
            session,
            rearm,
            expired_tx,
            shutdown_tx,
            watchdog: Some(watchdog),
        };
        (runner, expired_rx)
    }

    /// Starts a new run.
    pub async fn start(&self) -> Result<QuizProgress, QuizError> {
        let mut session = self.session.lock().await;
        session.start()?;
        self.rearm.notify_one();

        let progress = session.progress();
        tracing::info!(total = progress.total, "Quiz session started");
        Ok(progress)
    }

    /// Answers the current question.
    pub async fn answer(&self, letter: TraitLetter) -> Result<AnswerOutcome, QuizError> {
        let mut session = self.session.lock().await;
        self.expire_before_action(&mut session)?;

        let outcome = session.answer(letter)?;
        self.rearm.notify_one();

        match outcome {
            AnswerOutcome::Advanced { index } => {
                tracing::debug!(index, letter = %letter.as_char(), "Question answered");
            }
            AnswerOutcome::Completed(code) => {
                tracing::info!(category_code = %code, "Quiz session completed");
            }
        }
        Ok(outcome)
    }

    /// Steps back one question.
    pub async fn back(&self) -> Result<usize, QuizError> {
        let mut session = self.session.lock().await;
        self.expire_before_action(&mut session)?;

        let index = session.back()?;
        self.rearm.notify_one();
        tracing::debug!(index, "Stepped back");
        Ok(index)
    }

    /// Discards the run.
    pub async fn reset(&self) {
        let mut session = self.session.lock().await;
        session.reset();
        self.rearm.notify_one();
        tracing::info!("Quiz session reset");
    }

    pub async fn progress(&self) -> QuizProgress {
        self.session.lock().await.progress()
    }

    pub async fn current_question(&self) -> Option<Question> {
        self.session.lock().await.current_question().cloned()
    }

    pub async fn result(&self) -> Option<CategoryCode> {
        self.session.lock().await.result()
    }

    /// Stops the watchdog and waits for it to exit.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(handle) = self.watchdog.take() {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "Quiz watchdog ended abnormally");
            }
        }
    }

    /// Expires an overdue session before an action touches it, so the
    /// expiry is reported even when the watchdog has not fired yet.
    fn expire_before_action(&self, session: &mut QuizSession) -> Result<(), QuizError> {
        match session.expire_if_idle() {
            Some(expired) => {
                report_expiry(&self.expired_tx, expired);
                self.rearm.notify_one();
                Err(QuizError::Expired)
            }
            None => Ok(()),
        }
    }
}

impl Drop for QuizRunner {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
    }
}

async fn run_watchdog(
    session: Arc<Mutex<QuizSession>>,
    rearm: Arc<Notify>,
    expired_tx: mpsc::Sender<SessionExpired>,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        if *shutdown.borrow() {
            break;
        }

        let deadline = session.lock().await.inactivity_deadline();

        tokio::select! {
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }

            _ = rearm.notified() => {}

            _ = sleep_until_deadline(deadline) => {
                let expired = session.lock().await.expire_if_idle();
                if let Some(expired) = expired {
                    report_expiry(&expired_tx, expired);
                }
            }
        }
    }

    tracing::debug!("Quiz watchdog stopped");
}

/// Sleeps until `deadline`, or forever when the timer is inert.
async fn sleep_until_deadline(deadline: Option<time::Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}

/// Never blocks: it may run while the session lock is held.
fn report_expiry(tx: &mpsc::Sender<SessionExpired>, expired: SessionExpired) {
    tracing::info!(
        index = expired.index,
        discarded_answers = expired.discarded_answers,
        idle_secs = expired.idle_for.as_secs(),
        "Quiz session expired after inactivity"
    );
    match tx.try_send(expired) {
        Ok(()) => {}
        Err(mpsc::error::TrySendError::Full(_)) => {
            tracing::warn!("Quiz expiry notification dropped, listener is not keeping up");
        }
        Err(mpsc::error::TrySendError::Closed(_)) => {
            tracing::debug!("No listener for quiz expiry notifications");
        }
    }
}
