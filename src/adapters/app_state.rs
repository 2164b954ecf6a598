//! Shared application state built from configuration.
//!
//! `PetsonaAppState` holds the Arc-wrapped ports and settings that every
//! handler needs, and hands out handlers and quiz runners on demand.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use super::admin::PassphraseAuthorizer;
use super::identity::AnonymousIdentityProvider;
use super::store::store_from_config;
use crate::application::{AdminLoginHandler, QuizRunner, SubmitSurveyHandler};
use crate::config::{AppConfig, ConfigError};
use crate::domain::quiz::{QuestionBank, QuizSession, SessionExpired};
use crate::domain::survey::SurveyForm;
use crate::ports::{AdminAuthorizer, IdentityProvider, SubmissionStore};

/// Dependencies shared by the respondent and admin flows.
#[derive(Clone)]
pub struct PetsonaAppState {
    pub store: Arc<dyn SubmissionStore>,
    pub identity: Arc<dyn IdentityProvider>,
    pub authorizer: Arc<dyn AdminAuthorizer>,
    pub form: Arc<SurveyForm>,
    pub question_bank: Arc<QuestionBank>,
    pub inactivity_timeout: Duration,
}

impl PetsonaAppState {
    /// Validates `config` and wires the configured adapters with anonymous
    /// respondent identities.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Self::with_identity(config, Arc::new(AnonymousIdentityProvider::new()))
    }

    /// Like `from_config`, with a caller-supplied identity provider.
    pub fn with_identity(
        config: &AppConfig,
        identity: Arc<dyn IdentityProvider>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let authorizer = PassphraseAuthorizer::from(&config.admin);
        if !authorizer.is_configured() {
            tracing::warn!("No admin passphrase configured, reporting console is disabled");
        }

        Ok(Self {
            store: store_from_config(&config.storage),
            identity,
            authorizer: Arc::new(authorizer),
            form: Arc::new(config.survey.form()),
            question_bank: Arc::new(QuestionBank::standard().clone()),
            inactivity_timeout: config.quiz.inactivity_timeout(),
        })
    }

    /// A fresh, not yet started quiz session.
    pub fn quiz_session(&self) -> QuizSession {
        QuizSession::new(self.question_bank.clone(), self.inactivity_timeout)
    }

    /// Spawns a runner over a fresh session on the current runtime.
    pub fn quiz_runner(&self) -> (QuizRunner, mpsc::Receiver<SessionExpired>) {
        QuizRunner::spawn(self.quiz_session())
    }

    pub fn submit_survey_handler(&self) -> SubmitSurveyHandler {
        SubmitSurveyHandler::new(self.identity.clone(), self.store.clone(), self.form.clone())
    }

    pub fn admin_login_handler(&self) -> AdminLoginHandler {
        AdminLoginHandler::new(
            self.authorizer.clone(),
            self.identity.clone(),
            self.store.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::identity::FixedIdentityProvider;
    use crate::application::{
        AdminLoginCommand, AdminLoginError, SubmissionError, SubmitSurveyCommand,
    };
    use crate::config::{StorageBackend, ValidationError};
    use crate::domain::foundation::UserId;
    use crate::domain::survey::{SurveyAnswer, SurveyResponse, NEW_SERVICE};
    use secrecy::SecretString;
    use tempfile::TempDir;

    fn alice() -> Arc<dyn IdentityProvider> {
        Arc::new(FixedIdentityProvider::new(UserId::new("alice").unwrap()))
    }

    fn submit_command(text: &str) -> SubmitSurveyCommand {
        SubmitSurveyCommand {
            category_code: "INFP".parse().unwrap(),
            responses: SurveyResponse::new().with(NEW_SERVICE, SurveyAnswer::text(text)),
        }
    }

    fn login(passphrase: &str) -> AdminLoginCommand {
        AdminLoginCommand {
            passphrase: SecretString::new(passphrase.to_string()),
        }
    }

    #[tokio::test]
    async fn file_backend_persists_under_data_dir() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("nested").join("submissions");
        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::File;
        config.storage.data_dir = data_dir.clone();

        let state = PetsonaAppState::with_identity(&config, alice()).unwrap();
        let created = state
            .submit_survey_handler()
            .handle(submit_command("puppy yoga"))
            .await
            .unwrap();

        assert!(data_dir.join("alice.yaml").is_file());

        // A second state over the same directory sees the stored record.
        let reopened = PetsonaAppState::with_identity(&config, alice()).unwrap();
        let owner = UserId::new("alice").unwrap();
        assert_eq!(reopened.store.list_all(&owner).await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn memory_backend_writes_nothing_to_disk() {
        let temp = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.storage.data_dir = temp.path().join("unused");

        let state = PetsonaAppState::with_identity(&config, alice()).unwrap();
        state
            .submit_survey_handler()
            .handle(submit_command("dog walking"))
            .await
            .unwrap();

        assert!(!config.storage.data_dir.exists());
    }

    #[tokio::test]
    async fn survey_limits_come_from_config() {
        let mut config = AppConfig::default();
        config.survey.text_max_length = 10;

        let state = PetsonaAppState::with_identity(&config, alice()).unwrap();
        let err = state
            .submit_survey_handler()
            .handle(submit_command("eleven chars"))
            .await
            .unwrap_err();

        assert!(matches!(err, SubmissionError::ValidationFailed(_)));
    }

    #[tokio::test]
    async fn quiz_sessions_use_the_configured_timeout() {
        let mut config = AppConfig::default();
        config.quiz.inactivity_timeout_secs = 120;

        let state = PetsonaAppState::with_identity(&config, alice()).unwrap();
        assert_eq!(state.quiz_session().inactivity_timeout(), Duration::from_secs(120));

        let (runner, _expired) = state.quiz_runner();
        assert_eq!(runner.progress().await.total, state.question_bank.len());
        runner.shutdown().await;
    }

    #[tokio::test]
    async fn configured_passphrase_opens_the_console() {
        let mut config = AppConfig::default();
        config.admin.passphrase = Some(SecretString::new("walkies at dawn".to_string()));

        let state = PetsonaAppState::with_identity(&config, alice()).unwrap();
        let handler = state.admin_login_handler();

        assert!(handler.handle(login("walkies at dawn")).await.is_ok());
        assert_eq!(
            handler.handle(login("walkies at dusk")).await.err(),
            Some(AdminLoginError::AuthenticationFailed)
        );
    }

    #[tokio::test]
    async fn empty_passphrase_keeps_the_console_closed() {
        let mut config = AppConfig::default();
        config.admin.passphrase = Some(SecretString::new(String::new()));
        config.admin.min_passphrase_length = 0;

        let state = PetsonaAppState::with_identity(&config, alice()).unwrap();
        assert_eq!(
            state.admin_login_handler().handle(login("")).await.err(),
            Some(AdminLoginError::AuthenticationFailed)
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = AppConfig::default();
        config.quiz.inactivity_timeout_secs = 0;

        match PetsonaAppState::from_config(&config) {
            Err(ConfigError::ValidationFailed(e)) => {
                assert_eq!(e, ValidationError::InvalidInactivityTimeout)
            }
            Err(other) => panic!("unexpected error {:?}", other),
            Ok(_) => panic!("invalid config accepted"),
        }
    }
}
