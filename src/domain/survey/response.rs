//! Survey answers as a tagged union keyed by question kind.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One answer; the variant must match the question's kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurveyAnswer {
    MultiSelect {
        selected: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        other: Option<String>,
    },
    SingleSelect {
        #[serde(default)]
        selected: Option<String>,
    },
    FreeText {
        text: String,
    },
}

impl SurveyAnswer {
    pub fn multi<I, S>(selected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SurveyAnswer::MultiSelect {
            selected: selected.into_iter().map(Into::into).collect(),
            other: None,
        }
    }

    pub fn multi_with_other<I, S>(selected: I, other: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SurveyAnswer::MultiSelect {
            selected: selected.into_iter().map(Into::into).collect(),
            other: Some(other.into()),
        }
    }

    pub fn single(selected: impl Into<String>) -> Self {
        SurveyAnswer::SingleSelect {
            selected: Some(selected.into()),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        SurveyAnswer::FreeText { text: text.into() }
    }

    /// Short kind name for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SurveyAnswer::MultiSelect { .. } => "multi_select",
            SurveyAnswer::SingleSelect { .. } => "single_select",
            SurveyAnswer::FreeText { .. } => "free_text",
        }
    }
}

/// All answers of one survey, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveyResponse(BTreeMap<String, SurveyAnswer>);

impl SurveyResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, question_id: impl Into<String>, answer: SurveyAnswer) -> Self {
        self.0.insert(question_id.into(), answer);
        self
    }

    pub fn insert(&mut self, question_id: impl Into<String>, answer: SurveyAnswer) {
        self.0.insert(question_id.into(), answer);
    }

    pub fn get(&self, question_id: &str) -> Option<&SurveyAnswer> {
        self.0.get(question_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SurveyAnswer)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Selected labels plus the "other" value of a multi-select answer.
    pub fn multi_values(&self, question_id: &str) -> Vec<&str> {
        match self.get(question_id) {
            Some(SurveyAnswer::MultiSelect { selected, other }) => selected
                .iter()
                .map(String::as_str)
                .chain(other.as_deref())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Selected label of a single-select answer.
    pub fn single_value(&self, question_id: &str) -> Option<&str> {
        match self.get(question_id) {
            Some(SurveyAnswer::SingleSelect { selected }) => selected.as_deref(),
            _ => None,
        }
    }

    /// Text of a free-text answer.
    pub fn text_value(&self, question_id: &str) -> Option<&str> {
        match self.get(question_id) {
            Some(SurveyAnswer::FreeText { text }) => Some(text.as_str()),
            _ => None,
        }
    }

    pub(crate) fn map_values(self, mut f: impl FnMut(SurveyAnswer) -> SurveyAnswer) -> Self {
        Self(self.0.into_iter().map(|(k, v)| (k, f(v))).collect())
    }
}
