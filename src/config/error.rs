//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Tracing initialization failed: {0}")]
    TracingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Inactivity timeout must be between 1 and 86400 seconds")]
    InvalidInactivityTimeout,

    #[error("Text length limits are invalid: min {min} exceeds max {max}")]
    InvalidTextLimits { min: usize, max: usize },

    #[error("Text max length must be greater than zero")]
    ZeroTextMaxLength,

    #[error("Admin passphrase is shorter than {0} characters")]
    PassphraseTooShort(usize),

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
