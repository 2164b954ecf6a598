//! Survey submission handlers.

mod errors;
mod submit_survey;

pub use errors::SubmissionError;
pub use submit_survey::{SubmitSurveyCommand, SubmitSurveyHandler};
