//! Application layer - Commands, Handlers and the long-lived services that
//! coordinate the domain with the ports.

pub mod handlers;

pub use handlers::{admin, quiz, reporting, survey};

pub use handlers::admin::{AdminLoginCommand, AdminLoginError, AdminLoginHandler};
pub use handlers::quiz::QuizRunner;
pub use handlers::reporting::{ImportSummary, ReportingConsole, ReportingError};
pub use handlers::survey::{SubmissionError, SubmitSurveyCommand, SubmitSurveyHandler};
