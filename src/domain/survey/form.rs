//! Survey form definition - the follow-up questions asked after the quiz.

use serde::Serialize;

/// Question id of the multi-select "preferred experts" question.
pub const PREFERRED_EXPERTS: &str = "preferred_experts";
/// Question id of the open "what new service would you like" question.
pub const NEW_SERVICE: &str = "new_service";
/// Question id of the open "feedback on services you used" question.
pub const PREVIOUS_FEEDBACK: &str = "previous_feedback";
/// Question id of the single-select fee question.
pub const FEE: &str = "fee";

/// Characters rejected in every free-text value.
pub const DISALLOWED_CHARS: [char; 3] = ['<', '>', ';'];

/// Length limits for free-text answers, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextLimits {
    /// Minimum trimmed length; 0 disables the check.
    pub min_length: usize,
    /// Maximum raw length.
    pub max_length: usize,
}

impl Default for TextLimits {
    fn default() -> Self {
        Self {
            min_length: 0,
            max_length: 500,
        }
    }
}

/// Shape of a survey question and its constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurveyQuestionKind {
    MultiSelect {
        options: Vec<String>,
        /// Whether one extra free-text "other" value may be given.
        allow_other: bool,
        other_limits: TextLimits,
    },
    SingleSelect {
        options: Vec<String>,
    },
    FreeText {
        limits: TextLimits,
    },
}

/// One follow-up question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveyQuestion {
    pub id: String,
    pub prompt: String,
    pub kind: SurveyQuestionKind,
}

/// Ordered list of follow-up questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveyForm {
    questions: Vec<SurveyQuestion>,
}

impl SurveyForm {
    pub fn new(questions: Vec<SurveyQuestion>) -> Self {
        Self { questions }
    }

    /// The standard four-question follow-up survey.
    pub fn standard(text_limits: TextLimits) -> Self {
        let labels = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Self::new(vec![
            SurveyQuestion {
                id: PREFERRED_EXPERTS.to_string(),
                prompt: "Which experts would you like to consult about your companion?".to_string(),
                kind: SurveyQuestionKind::MultiSelect {
                    options: labels(&[
                        "Veterinarian",
                        "Trainer",
                        "Behaviorist",
                        "Groomer",
                        "Nutritionist",
                        "Pet sitter",
                    ]),
                    allow_other: true,
                    other_limits: TextLimits {
                        min_length: 1,
                        max_length: 100,
                    },
                },
            },
            SurveyQuestion {
                id: NEW_SERVICE.to_string(),
                prompt: "What new service would help you and your companion?".to_string(),
                kind: SurveyQuestionKind::FreeText { limits: text_limits },
            },
            SurveyQuestion {
                id: PREVIOUS_FEEDBACK.to_string(),
                prompt: "How was your experience with services you used before?".to_string(),
                kind: SurveyQuestionKind::FreeText { limits: text_limits },
            },
            SurveyQuestion {
                id: FEE.to_string(),
                prompt: "How much would you pay for a one-hour consultation?".to_string(),
                kind: SurveyQuestionKind::SingleSelect {
                    options: labels(&["Under $30", "$30 to $60", "$60 to $100", "Over $100"]),
                },
            },
        ])
    }

    pub fn questions(&self) -> &[SurveyQuestion] {
        &self.questions
    }

    pub fn get(&self, id: &str) -> Option<&SurveyQuestion> {
        self.questions.iter().find(|q| q.id == id)
    }
}

impl Default for SurveyForm {
    fn default() -> Self {
        Self::standard(TextLimits::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_form_has_the_four_export_questions() {
        let form = SurveyForm::default();
        let ids: Vec<_> = form.questions().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec![PREFERRED_EXPERTS, NEW_SERVICE, PREVIOUS_FEEDBACK, FEE]);
    }

    #[test]
    fn standard_form_uses_given_text_limits() {
        let limits = TextLimits {
            min_length: 5,
            max_length: 200,
        };
        let form = SurveyForm::standard(limits);
        match &form.get(NEW_SERVICE).unwrap().kind {
            SurveyQuestionKind::FreeText { limits: got } => assert_eq!(*got, limits),
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn default_text_limit_is_five_hundred() {
        assert_eq!(TextLimits::default().max_length, 500);
        assert_eq!(TextLimits::default().min_length, 0);
    }
}
