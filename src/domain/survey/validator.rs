//! Survey validator - per-field checks run before a submission is accepted.
//!
//! Every question is validated independently and every problem is collected,
//! so the caller can show all field errors at once.

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

use super::form::{SurveyForm, SurveyQuestionKind, TextLimits, DISALLOWED_CHARS};
use super::response::{SurveyAnswer, SurveyResponse};

/// A single field-scoped problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldError {
    #[error("must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("contains disallowed character '{character}'")]
    DisallowedCharacter { character: char },

    #[error("'{value}' is not one of the options")]
    UnknownOption { value: String },

    #[error("'{value}' was selected more than once")]
    DuplicateOption { value: String },

    #[error("an 'other' value is not allowed here")]
    OtherNotAllowed,

    #[error("expected a {expected} answer, got {actual}")]
    KindMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("no such question")]
    UnknownQuestion,
}

/// Outcome of validating a whole response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    errors: BTreeMap<String, Vec<FieldError>>,
}

impl ValidationReport {
    /// True when submission may proceed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors attached to one question.
    pub fn field_errors(&self, question_id: &str) -> &[FieldError] {
        self.errors.get(question_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ids of every question with an outstanding error.
    pub fn invalid_fields(&self) -> Vec<&str> {
        self.errors.keys().map(String::as_str).collect()
    }

    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    fn push(&mut self, question_id: &str, error: FieldError) {
        self.errors.entry(question_id.to_string()).or_default().push(error);
    }

    fn extend(&mut self, question_id: &str, errors: Vec<FieldError>) {
        for error in errors {
            self.push(question_id, error);
        }
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .flat_map(|(field, errors)| errors.iter().map(move |e| format!("{}: {}", field, e)))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Stateless validator over a form definition.
pub struct SurveyValidator;

impl SurveyValidator {
    /// Validates `response` against `form`.
    ///
    /// Missing answers count as unset and are accepted unless a free-text
    /// question has a positive minimum length.
    pub fn validate(form: &SurveyForm, response: &SurveyResponse) -> ValidationReport {
        let mut report = ValidationReport::default();

        for question in form.questions() {
            let answer = response.get(&question.id);
            let errors = match (&question.kind, answer) {
                (SurveyQuestionKind::FreeText { limits }, None) => check_text("", limits),
                (SurveyQuestionKind::FreeText { limits }, Some(SurveyAnswer::FreeText { text })) => {
                    check_text(text, limits)
                }
                (SurveyQuestionKind::SingleSelect { .. }, None) => Vec::new(),
                (
                    SurveyQuestionKind::SingleSelect { options },
                    Some(SurveyAnswer::SingleSelect { selected }),
                ) => check_single(options, selected.as_deref()),
                (SurveyQuestionKind::MultiSelect { .. }, None) => Vec::new(),
                (
                    SurveyQuestionKind::MultiSelect {
                        options,
                        allow_other,
                        other_limits,
                    },
                    Some(SurveyAnswer::MultiSelect { selected, other }),
                ) => check_multi(options, *allow_other, other_limits, selected, other.as_deref()),
                (kind, Some(answer)) => vec![FieldError::KindMismatch {
                    expected: kind_name(kind),
                    actual: answer.kind_name(),
                }],
            };
            report.extend(&question.id, errors);
        }

        for (question_id, _) in response.iter() {
            if form.get(question_id).is_none() {
                report.push(question_id, FieldError::UnknownQuestion);
            }
        }

        report
    }
}

fn kind_name(kind: &SurveyQuestionKind) -> &'static str {
    match kind {
        SurveyQuestionKind::MultiSelect { .. } => "multi_select",
        SurveyQuestionKind::SingleSelect { .. } => "single_select",
        SurveyQuestionKind::FreeText { .. } => "free_text",
    }
}

/// Length and character checks shared by text answers and "other" values.
pub fn check_text(text: &str, limits: &TextLimits) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let trimmed = text.trim().chars().count();
    if limits.min_length > 0 && trimmed < limits.min_length {
        errors.push(FieldError::TooShort {
            min: limits.min_length,
            actual: trimmed,
        });
    }

    let raw = text.chars().count();
    if raw > limits.max_length {
        errors.push(FieldError::TooLong {
            max: limits.max_length,
            actual: raw,
        });
    }

    let mut reported = HashSet::new();
    for c in text.chars().filter(|c| DISALLOWED_CHARS.contains(c)) {
        if reported.insert(c) {
            errors.push(FieldError::DisallowedCharacter { character: c });
        }
    }

    errors
}

fn check_single(options: &[String], selected: Option<&str>) -> Vec<FieldError> {
    match selected {
        Some(value) if !options.iter().any(|o| o == value) => vec![FieldError::UnknownOption {
            value: value.to_string(),
        }],
        _ => Vec::new(),
    }
}

fn check_multi(
    options: &[String],
    allow_other: bool,
    other_limits: &TextLimits,
    selected: &[String],
    other: Option<&str>,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for value in selected {
        if !options.contains(value) {
            errors.push(FieldError::UnknownOption {
                value: value.clone(),
            });
        } else if !seen.insert(value.as_str()) {
            errors.push(FieldError::DuplicateOption {
                value: value.clone(),
            });
        }
    }

    if let Some(other) = other {
        if allow_other {
            errors.extend(check_text(other, other_limits));
        } else {
            errors.push(FieldError::OtherNotAllowed);
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::form::{FEE, NEW_SERVICE, PREFERRED_EXPERTS, PREVIOUS_FEEDBACK};

    fn form() -> SurveyForm {
        SurveyForm::default()
    }

    fn valid_response() -> SurveyResponse {
        SurveyResponse::new()
            .with(PREFERRED_EXPERTS, SurveyAnswer::multi(["Trainer", "Groomer"]))
            .with(NEW_SERVICE, SurveyAnswer::text("Weekend day care"))
            .with(PREVIOUS_FEEDBACK, SurveyAnswer::text("Friendly staff"))
            .with(FEE, SurveyAnswer::single("$30 to $60"))
    }

    #[test]
    fn valid_response_passes() {
        let report = SurveyValidator::validate(&form(), &valid_response());
        assert!(report.is_valid(), "{}", report);
    }

    #[test]
    fn empty_response_passes_with_default_limits() {
        let report = SurveyValidator::validate(&form(), &SurveyResponse::new());
        assert!(report.is_valid());
    }

    #[test]
    fn text_over_max_is_rejected_and_truncation_accepted() {
        let long = "a".repeat(501);
        let response = valid_response().with(NEW_SERVICE, SurveyAnswer::text(long.clone()));
        let report = SurveyValidator::validate(&form(), &response);
        assert_eq!(
            report.field_errors(NEW_SERVICE),
            &[FieldError::TooLong { max: 500, actual: 501 }]
        );

        let truncated: String = long.chars().take(500).collect();
        let response = valid_response().with(NEW_SERVICE, SurveyAnswer::text(truncated));
        assert!(SurveyValidator::validate(&form(), &response).is_valid());
    }

    #[test]
    fn max_length_counts_characters_not_bytes() {
        let text = "é".repeat(500);
        let response = valid_response().with(NEW_SERVICE, SurveyAnswer::text(text));
        assert!(SurveyValidator::validate(&form(), &response).is_valid());
    }

    #[test]
    fn min_length_uses_trimmed_text() {
        let form = SurveyForm::standard(TextLimits {
            min_length: 5,
            max_length: 500,
        });
        let response = valid_response().with(PREVIOUS_FEEDBACK, SurveyAnswer::text("  ok    "));
        let report = SurveyValidator::validate(&form, &response);
        assert_eq!(
            report.field_errors(PREVIOUS_FEEDBACK),
            &[FieldError::TooShort { min: 5, actual: 2 }]
        );
    }

    #[test]
    fn missing_text_fails_positive_min_length() {
        let form = SurveyForm::standard(TextLimits {
            min_length: 1,
            max_length: 500,
        });
        let report = SurveyValidator::validate(&form, &SurveyResponse::new());
        assert_eq!(report.invalid_fields(), vec![NEW_SERVICE, PREVIOUS_FEEDBACK]);
    }

    #[test]
    fn markup_characters_are_rejected_once_each() {
        let response =
            valid_response().with(NEW_SERVICE, SurveyAnswer::text("<b>bold</b>; again <i>"));
        let report = SurveyValidator::validate(&form(), &response);
        assert_eq!(
            report.field_errors(NEW_SERVICE),
            &[
                FieldError::DisallowedCharacter { character: '<' },
                FieldError::DisallowedCharacter { character: '>' },
                FieldError::DisallowedCharacter { character: ';' },
            ]
        );
    }

    #[test]
    fn single_select_rejects_unknown_option() {
        let response = valid_response().with(FEE, SurveyAnswer::single("Free"));
        let report = SurveyValidator::validate(&form(), &response);
        assert_eq!(
            report.field_errors(FEE),
            &[FieldError::UnknownOption {
                value: "Free".to_string()
            }]
        );
    }

    #[test]
    fn single_select_accepts_unset() {
        let response = valid_response().with(FEE, SurveyAnswer::SingleSelect { selected: None });
        assert!(SurveyValidator::validate(&form(), &response).is_valid());
    }

    #[test]
    fn multi_select_rejects_unknown_and_duplicate_labels() {
        let response = valid_response().with(
            PREFERRED_EXPERTS,
            SurveyAnswer::multi(["Trainer", "Astrologer", "Trainer"]),
        );
        let report = SurveyValidator::validate(&form(), &response);
        assert_eq!(
            report.field_errors(PREFERRED_EXPERTS),
            &[
                FieldError::UnknownOption {
                    value: "Astrologer".to_string()
                },
                FieldError::DuplicateOption {
                    value: "Trainer".to_string()
                },
            ]
        );
    }

    #[test]
    fn multi_select_other_obeys_text_rules() {
        let response = valid_response().with(
            PREFERRED_EXPERTS,
            SurveyAnswer::multi_with_other(["Trainer"], "<script>"),
        );
        let report = SurveyValidator::validate(&form(), &response);
        assert_eq!(report.field_errors(PREFERRED_EXPERTS).len(), 2);

        let response = valid_response().with(
            PREFERRED_EXPERTS,
            SurveyAnswer::multi_with_other(["Trainer"], "Hydrotherapist"),
        );
        assert!(SurveyValidator::validate(&form(), &response).is_valid());
    }

    #[test]
    fn blank_other_is_too_short() {
        let response = valid_response().with(
            PREFERRED_EXPERTS,
            SurveyAnswer::multi_with_other(Vec::<String>::new(), "   "),
        );
        let report = SurveyValidator::validate(&form(), &response);
        assert_eq!(
            report.field_errors(PREFERRED_EXPERTS),
            &[FieldError::TooShort { min: 1, actual: 0 }]
        );
    }

    #[test]
    fn other_is_rejected_when_not_allowed() {
        let form = SurveyForm::new(vec![super::super::form::SurveyQuestion {
            id: "colors".to_string(),
            prompt: "Colors".to_string(),
            kind: SurveyQuestionKind::MultiSelect {
                options: vec!["Red".to_string()],
                allow_other: false,
                other_limits: TextLimits::default(),
            },
        }]);
        let response =
            SurveyResponse::new().with("colors", SurveyAnswer::multi_with_other(["Red"], "Teal"));
        let report = SurveyValidator::validate(&form, &response);
        assert_eq!(report.field_errors("colors"), &[FieldError::OtherNotAllowed]);
    }

    #[test]
    fn kind_mismatch_is_reported() {
        let response = valid_response().with(FEE, SurveyAnswer::multi(["Under $30", "Over $100"]));
        let report = SurveyValidator::validate(&form(), &response);
        assert_eq!(
            report.field_errors(FEE),
            &[FieldError::KindMismatch {
                expected: "single_select",
                actual: "multi_select"
            }]
        );
    }

    #[test]
    fn unknown_question_is_reported() {
        let response = valid_response().with("favourite_color", SurveyAnswer::text("blue"));
        let report = SurveyValidator::validate(&form(), &response);
        assert_eq!(report.field_errors("favourite_color"), &[FieldError::UnknownQuestion]);
        assert_eq!(report.error_count(), 1);
    }
}
