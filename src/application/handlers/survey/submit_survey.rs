//! SubmitSurveyHandler - validates, sanitizes and stores a finished survey.

use std::sync::Arc;

use super::errors::SubmissionError;
use crate::domain::catalogue::{CategoryCode, ResultCatalogue};
use crate::domain::submission::Submission;
use crate::domain::survey::{sanitize_response, SurveyForm, SurveyResponse, SurveyValidator};
use crate::ports::{IdentityProvider, SubmissionStore};

/// Command to submit the follow-up survey for a completed quiz.
#[derive(Debug, Clone)]
pub struct SubmitSurveyCommand {
    pub category_code: CategoryCode,
    pub responses: SurveyResponse,
}

/// Handler for survey submissions.
pub struct SubmitSurveyHandler {
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn SubmissionStore>,
    form: Arc<SurveyForm>,
}

impl SubmitSurveyHandler {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn SubmissionStore>,
        form: Arc<SurveyForm>,
    ) -> Self {
        Self {
            identity,
            store,
            form,
        }
    }

    pub fn form(&self) -> &SurveyForm {
        &self.form
    }

    pub async fn handle(&self, cmd: SubmitSurveyCommand) -> Result<Submission, SubmissionError> {
        // 1. Resolve the owner; nothing is written without one
        let owner = self.identity.current_user().await.map_err(|e| {
            tracing::warn!(error = %e, "Survey submission without respondent identity");
            SubmissionError::from(e)
        })?;

        // 2. Validate
        let report = SurveyValidator::validate(&self.form, &cmd.responses);
        if !report.is_valid() {
            tracing::debug!(
                user_id = %owner,
                errors = report.error_count(),
                "Survey submission rejected"
            );
            return Err(SubmissionError::ValidationFailed(report));
        }

        // 3. Build the submission from sanitized answers
        let profile = ResultCatalogue::get(&cmd.category_code).ok_or_else(|| {
            SubmissionError::Internal(format!("no profile for {}", cmd.category_code))
        })?;
        let submission = Submission::new(
            cmd.category_code,
            profile,
            sanitize_response(cmd.responses),
        )?;

        // 4. Persist
        self.store.create(&owner, &submission).await.map_err(|e| {
            tracing::error!(user_id = %owner, error = %e, "Failed to store submission");
            SubmissionError::from(e)
        })?;

        tracing::info!(
            user_id = %owner,
            submission_id = %submission.submission_id(),
            category_code = %submission.category_code(),
            "Submission created"
        );
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AuthError, DomainError, UserId};
    use crate::domain::submission::SubmissionChange;
    use crate::domain::survey::{SurveyAnswer, FEE, NEW_SERVICE, PREFERRED_EXPERTS};
    use crate::ports::SubmissionFeed;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockIdentity {
        user: Option<UserId>,
    }

    #[async_trait]
    impl IdentityProvider for MockIdentity {
        async fn current_user(&self) -> Result<UserId, AuthError> {
            self.user
                .clone()
                .ok_or_else(|| AuthError::identity_unavailable("signed out"))
        }
    }

    struct MockStore {
        created: Mutex<Vec<(UserId, Submission)>>,
        fail_create: bool,
    }

    impl MockStore {
        fn new() -> Self {
            Self {
                created: Mutex::new(Vec::new()),
                fail_create: false,
            }
        }

        fn failing() -> Self {
            Self {
                created: Mutex::new(Vec::new()),
                fail_create: true,
            }
        }

        fn created(&self) -> Vec<(UserId, Submission)> {
            self.created.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SubmissionStore for MockStore {
        async fn create(&self, owner: &UserId, submission: &Submission) -> Result<(), DomainError> {
            if self.fail_create {
                return Err(DomainError::persistence("Simulated write failure"));
            }
            self.created
                .lock()
                .unwrap()
                .push((owner.clone(), submission.clone()));
            Ok(())
        }

        async fn list_all(&self, _owner: &UserId) -> Result<Vec<Submission>, DomainError> {
            Ok(vec![])
        }

        async fn delete_all(&self, _owner: &UserId) -> Result<usize, DomainError> {
            Ok(0)
        }

        async fn watch(&self, _owner: &UserId) -> Result<SubmissionFeed, DomainError> {
            Ok(Box::pin(futures::stream::empty::<SubmissionChange>()))
        }
    }

    fn handler(user: Option<&str>, store: Arc<MockStore>) -> SubmitSurveyHandler {
        let identity = Arc::new(MockIdentity {
            user: user.map(|u| UserId::new(u).unwrap()),
        });
        SubmitSurveyHandler::new(identity, store, Arc::new(SurveyForm::default()))
    }

    fn command(responses: SurveyResponse) -> SubmitSurveyCommand {
        SubmitSurveyCommand {
            category_code: "ESFJ".parse().unwrap(),
            responses,
        }
    }

    fn valid_responses() -> SurveyResponse {
        SurveyResponse::new()
            .with(PREFERRED_EXPERTS, SurveyAnswer::multi(["Veterinarian"]))
            .with(NEW_SERVICE, SurveyAnswer::text("Tom & Jerry's playdate"))
            .with(FEE, SurveyAnswer::single("Over $100"))
    }

    #[tokio::test]
    async fn stores_sanitized_submission_for_current_user() {
        let store = Arc::new(MockStore::new());
        let handler = handler(Some("alice"), store.clone());

        let submission = handler.handle(command(valid_responses())).await.unwrap();

        assert_eq!(submission.nickname(), "The Host");
        assert_eq!(
            submission.responses().text_value(NEW_SERVICE),
            Some("Tom &amp; Jerry&#x27;s playdate")
        );
        let created = store.created();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].0.as_str(), "alice");
        assert_eq!(created[0].1, submission);
    }

    #[tokio::test]
    async fn fails_without_identity_and_writes_nothing() {
        let store = Arc::new(MockStore::new());
        let handler = handler(None, store.clone());

        let result = handler.handle(command(valid_responses())).await;

        assert!(matches!(result, Err(SubmissionError::IdentityUnavailable(_))));
        assert!(store.created().is_empty());
    }

    #[tokio::test]
    async fn invalid_answers_return_the_report() {
        let store = Arc::new(MockStore::new());
        let handler = handler(Some("alice"), store.clone());
        let responses = valid_responses().with(NEW_SERVICE, SurveyAnswer::text("a".repeat(501)));

        let err = handler.handle(command(responses)).await.unwrap_err();

        let report = err.report().unwrap();
        assert_eq!(report.invalid_fields(), vec![NEW_SERVICE]);
        assert!(store.created().is_empty());
    }

    #[tokio::test]
    async fn store_failure_is_persistence_failed() {
        let store = Arc::new(MockStore::failing());
        let handler = handler(Some("alice"), store);

        let result = handler.handle(command(valid_responses())).await;

        assert!(matches!(result, Err(SubmissionError::PersistenceFailed(_))));
    }
}
