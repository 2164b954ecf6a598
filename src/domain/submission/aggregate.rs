//! Submission aggregate.
//!
//! A submission is the persisted outcome of one completed quiz plus its
//! follow-up survey. It belongs to exactly one respondent, is never mutated
//! after creation, and is only ever deleted in bulk.

use crate::domain::catalogue::{CategoryCode, ResultProfile};
use crate::domain::foundation::{DomainError, SubmissionId, Timestamp};
use crate::domain::survey::SurveyResponse;
use serde::{Deserialize, Serialize};

/// Immutable record of one completed questionnaire.
///
/// # Invariants
///
/// - `submission_id` is globally unique
/// - `nickname` is the catalogue nickname of `category_code` at creation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    submission_id: SubmissionId,
    timestamp: Timestamp,
    category_code: CategoryCode,
    nickname: String,
    responses: SurveyResponse,
}

impl Submission {
    /// Creates a fresh submission stamped with a new id and the current time.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the profile does not describe `category_code`
    pub fn new(
        category_code: CategoryCode,
        profile: &ResultProfile,
        responses: SurveyResponse,
    ) -> Result<Self, DomainError> {
        if profile.code != category_code {
            return Err(DomainError::validation(
                "nickname",
                format!(
                    "profile {} does not match category {}",
                    profile.code, category_code
                ),
            ));
        }

        Ok(Self {
            submission_id: SubmissionId::new(),
            timestamp: Timestamp::now(),
            category_code,
            nickname: profile.nickname.to_string(),
            responses,
        })
    }

    /// Reconstitute a submission from persistence (no validation).
    pub fn reconstitute(
        submission_id: SubmissionId,
        timestamp: Timestamp,
        category_code: CategoryCode,
        nickname: String,
        responses: SurveyResponse,
    ) -> Self {
        Self {
            submission_id,
            timestamp,
            category_code,
            nickname,
            responses,
        }
    }

    pub fn submission_id(&self) -> SubmissionId {
        self.submission_id
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    pub fn category_code(&self) -> CategoryCode {
        self.category_code
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn responses(&self) -> &SurveyResponse {
        &self.responses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalogue::ResultCatalogue;
    use crate::domain::survey::{SurveyAnswer, FEE};

    fn code(s: &str) -> CategoryCode {
        s.parse().unwrap()
    }

    #[test]
    fn new_snapshots_the_catalogue_nickname() {
        let code = code("ISTJ");
        let profile = ResultCatalogue::get(&code).unwrap();
        let submission = Submission::new(code, profile, SurveyResponse::new()).unwrap();

        assert_eq!(submission.category_code(), code);
        assert_eq!(submission.nickname(), profile.nickname);
    }

    #[test]
    fn new_rejects_a_mismatched_profile() {
        let profile = ResultCatalogue::get(&code("ENFP")).unwrap();
        let result = Submission::new(code("ISTJ"), profile, SurveyResponse::new());
        assert!(result.is_err());
    }

    #[test]
    fn each_submission_gets_a_fresh_id() {
        let code = code("ESFJ");
        let profile = ResultCatalogue::get(&code).unwrap();
        let a = Submission::new(code, profile, SurveyResponse::new()).unwrap();
        let b = Submission::new(code, profile, SurveyResponse::new()).unwrap();
        assert_ne!(a.submission_id(), b.submission_id());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let submission = Submission::reconstitute(
            SubmissionId::new(),
            Timestamp::from_unix_secs(1_700_000_000),
            code("INFP"),
            "The Dreamer".to_string(),
            SurveyResponse::new().with(FEE, SurveyAnswer::single("Under $30")),
        );

        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("submissionId").is_some());
        assert_eq!(json["categoryCode"], "INFP");
        assert_eq!(json["nickname"], "The Dreamer");
        assert_eq!(json["responses"]["fee"]["selected"], "Under $30");
    }
}
