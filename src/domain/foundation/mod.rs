//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that the quiz,
//! survey and reporting modules build on.

mod auth;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use auth::{AdminGrant, AuthError};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{SubmissionId, UserId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
