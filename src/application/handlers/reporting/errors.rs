//! Errors of the reporting console.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::reporting::ExportError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportingError {
    #[error("Store operation failed: {0}")]
    PersistenceFailed(String),

    #[error("Export failed: {0}")]
    ExportFailed(String),

    #[error("Import rejected: {0}")]
    InvalidImport(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ReportingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ReportingError::PersistenceFailed(_) => ErrorCode::PersistenceFailed,
            ReportingError::ExportFailed(_) => ErrorCode::SerializationFailed,
            ReportingError::InvalidImport(_) => ErrorCode::InvalidFormat,
            ReportingError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

impl From<DomainError> for ReportingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::PersistenceFailed | ErrorCode::SerializationFailed => {
                ReportingError::PersistenceFailed(err.message)
            }
            _ => ReportingError::Internal(err.to_string()),
        }
    }
}

impl From<ExportError> for ReportingError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Encode(_) => ReportingError::ExportFailed(err.to_string()),
            ExportError::InvalidPayload(_) | ExportError::DuplicateSubmission(_) => {
                ReportingError::InvalidImport(err.to_string())
            }
        }
    }
}
