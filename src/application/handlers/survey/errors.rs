//! Errors of the submission pipeline.

use thiserror::Error;

use crate::domain::foundation::{AuthError, DomainError, ErrorCode};
use crate::domain::survey::ValidationReport;

/// Why a survey submission was not stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Respondent identity unavailable: {0}")]
    IdentityUnavailable(String),

    #[error("Survey answers are invalid: {0}")]
    ValidationFailed(ValidationReport),

    #[error("Failed to store submission: {0}")]
    PersistenceFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SubmissionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SubmissionError::IdentityUnavailable(_) => ErrorCode::IdentityUnavailable,
            SubmissionError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            SubmissionError::PersistenceFailed(_) => ErrorCode::PersistenceFailed,
            SubmissionError::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// The validation report, when validation was the cause.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            SubmissionError::ValidationFailed(report) => Some(report),
            _ => None,
        }
    }
}

impl From<AuthError> for SubmissionError {
    fn from(err: AuthError) -> Self {
        SubmissionError::IdentityUnavailable(err.to_string())
    }
}

impl From<DomainError> for SubmissionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::PersistenceFailed | ErrorCode::SerializationFailed => {
                SubmissionError::PersistenceFailed(err.message)
            }
            ErrorCode::IdentityUnavailable => SubmissionError::IdentityUnavailable(err.message),
            _ => SubmissionError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_failures_map_to_persistence_failed() {
        let err: SubmissionError = DomainError::persistence("disk full").into();
        assert_eq!(err, SubmissionError::PersistenceFailed("disk full".to_string()));
        assert_eq!(err.code(), ErrorCode::PersistenceFailed);
    }

    #[test]
    fn auth_errors_map_to_identity_unavailable() {
        let err: SubmissionError = AuthError::identity_unavailable("offline").into();
        assert_eq!(err.code(), ErrorCode::IdentityUnavailable);
    }
}
