//! Follow-up survey: form definition, answers, validation and sanitization.

mod form;
mod response;
mod sanitize;
mod validator;

pub use form::{
    SurveyForm, SurveyQuestion, SurveyQuestionKind, TextLimits, DISALLOWED_CHARS, FEE,
    NEW_SERVICE, PREFERRED_EXPERTS, PREVIOUS_FEEDBACK,
};
pub use response::{SurveyAnswer, SurveyResponse};
pub use sanitize::{sanitize_response, sanitize_text};
pub use validator::{check_text, FieldError, SurveyValidator, ValidationReport};
