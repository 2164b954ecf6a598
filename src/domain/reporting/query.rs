//! Keyword and category filters over submissions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::catalogue::CategoryCode;
use crate::domain::submission::Submission;

/// Category filter: everything, or one exact code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "code", rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Code(CategoryCode),
}

impl CategoryFilter {
    pub fn matches(&self, code: CategoryCode) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Code(wanted) => *wanted == code,
        }
    }
}

/// AND-composed keyword and category filter.
///
/// The keyword is matched case-insensitively against every field value of
/// the serialized submission, so it hits ids, timestamps, codes, nicknames
/// and every answer alike. Field names and JSON escaping never take part.
/// An empty keyword matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionQuery {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub category: CategoryFilter,
}

impl SubmissionQuery {
    /// Matches every submission.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    pub fn with_category(mut self, code: CategoryCode) -> Self {
        self.category = CategoryFilter::Code(code);
        self
    }

    pub fn matches(&self, submission: &Submission) -> bool {
        if !self.category.matches(submission.category_code()) {
            return false;
        }

        let keyword = self.keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return true;
        }

        serde_json::to_value(submission)
            .map(|content| value_contains(&content, &keyword))
            .unwrap_or(false)
    }
}

/// Serde tag naming an answer's kind; structure rather than content.
const ANSWER_KIND_TAG: &str = "type";

/// Whether any leaf value under `value` contains the lowercased `keyword`.
fn value_contains(value: &Value, keyword: &str) -> bool {
    match value {
        Value::String(s) => s.to_lowercase().contains(keyword),
        Value::Array(items) => items.iter().any(|v| value_contains(v, keyword)),
        Value::Object(fields) => fields
            .iter()
            .filter(|(name, _)| name.as_str() != ANSWER_KIND_TAG)
            .any(|(_, v)| value_contains(v, keyword)),
        Value::Number(n) => n.to_string().contains(keyword),
        Value::Bool(_) | Value::Null => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{SubmissionId, Timestamp};
    use crate::domain::survey::{
        SurveyAnswer, SurveyResponse, FEE, NEW_SERVICE, PREFERRED_EXPERTS,
    };

    fn submission(code: &str, service: &str) -> Submission {
        Submission::reconstitute(
            SubmissionId::new(),
            Timestamp::from_unix_secs(1_700_000_000),
            code.parse().unwrap(),
            "Nick".to_string(),
            SurveyResponse::new().with(NEW_SERVICE, SurveyAnswer::text(service)),
        )
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(SubmissionQuery::all().matches(&submission("ISTJ", "anything")));
    }

    #[test]
    fn keyword_is_case_insensitive_over_answers() {
        let s = submission("ISTJ", "Weekend Day Care");
        assert!(SubmissionQuery::all().with_keyword("day care").matches(&s));
        assert!(SubmissionQuery::all().with_keyword("DAY").matches(&s));
        assert!(!SubmissionQuery::all().with_keyword("grooming").matches(&s));
    }

    #[test]
    fn keyword_hits_category_code_and_id() {
        let s = submission("ENFP", "x");
        assert!(SubmissionQuery::all().with_keyword("enfp").matches(&s));
        let id = s.submission_id().to_string();
        assert!(SubmissionQuery::all().with_keyword(&id[..8]).matches(&s));
    }

    #[test]
    fn category_and_keyword_compose_with_and() {
        let s = submission("ISTJ", "day care");
        let query = SubmissionQuery::all()
            .with_keyword("day care")
            .with_category("ENFP".parse().unwrap());
        assert!(!query.matches(&s));

        let query = SubmissionQuery::all()
            .with_keyword("day care")
            .with_category("ISTJ".parse().unwrap());
        assert!(query.matches(&s));
    }

    #[test]
    fn field_names_do_not_match() {
        let s = submission("ISTJ", "day care");
        for structural in ["selected", "type", "free_text", "text", "nickname", "responses"] {
            assert!(
                !SubmissionQuery::all().with_keyword(structural).matches(&s),
                "{} matched",
                structural
            );
        }
    }

    #[test]
    fn keyword_with_backslash_matches_stored_text() {
        let s = submission("ISTJ", r"C:\pets\rex");
        assert!(SubmissionQuery::all().with_keyword(r"c:\pets").matches(&s));
    }

    #[test]
    fn keyword_reaches_nested_answer_values() {
        let s = Submission::reconstitute(
            SubmissionId::new(),
            Timestamp::from_unix_secs(1_700_000_000),
            "ENFP".parse().unwrap(),
            "Nick".to_string(),
            SurveyResponse::new()
                .with(
                    PREFERRED_EXPERTS,
                    SurveyAnswer::multi_with_other(["Trainer"], "Hydrotherapist"),
                )
                .with(FEE, SurveyAnswer::single("Under $30")),
        );
        assert!(SubmissionQuery::all().with_keyword("hydro").matches(&s));
        assert!(SubmissionQuery::all().with_keyword("under $30").matches(&s));
        assert!(SubmissionQuery::all().with_keyword("2023").matches(&s));
    }
}
