//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PETSONA` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use petsona::config::{init_tracing, AppConfig};
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! init_tracing(&config.logging).expect("Failed to install tracing");
//!
//! println!("Quiz timeout: {:?}", config.quiz.inactivity_timeout());
//! ```

mod admin;
mod error;
mod logging;
mod quiz;
mod storage;
mod survey;

pub use admin::AdminConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{init_tracing, LogFormat, LoggingConfig};
pub use quiz::QuizConfig;
pub use storage::{StorageBackend, StorageConfig};
pub use survey::SurveyConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// in-memory setup with admin access disabled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Quiz session settings (inactivity timeout)
    #[serde(default)]
    pub quiz: QuizConfig,

    /// Follow-up survey text limits
    #[serde(default)]
    pub survey: SurveyConfig,

    /// Admin passphrase
    #[serde(default)]
    pub admin: AdminConfig,

    /// Submission store backend
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PETSONA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PETSONA__QUIZ__INACTIVITY_TIMEOUT_SECS=120` -> `quiz.inactivity_timeout_secs = 120`
    /// - `PETSONA__STORAGE__BACKEND=file` -> `storage.backend = file`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PETSONA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.quiz.validate()?;
        self.survey.validate()?;
        self.admin.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
