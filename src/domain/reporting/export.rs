//! Delimited (CSV) and structured (JSON) renderings of submissions.

use std::collections::HashSet;
use thiserror::Error;

use crate::domain::foundation::SubmissionId;
use crate::domain::submission::Submission;
use crate::domain::survey::{FEE, NEW_SERVICE, PREFERRED_EXPERTS, PREVIOUS_FEEDBACK};

/// Column header of the delimited export.
pub const CSV_HEADER: [&str; 8] = [
    "submission_id",
    "timestamp",
    "category_code",
    "nickname",
    "preferred_experts",
    "new_service",
    "previous_feedback",
    "fee",
];

/// Separator between multiple experts inside one cell.
pub const EXPERT_SEPARATOR: &str = "; ";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode submissions: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("structured payload is invalid: {0}")]
    InvalidPayload(#[source] serde_json::Error),

    #[error("structured payload contains submission {0} more than once")]
    DuplicateSubmission(SubmissionId),
}

/// Renders submissions as CSV, one row per submission in the given order.
///
/// Free-text columns are always quoted. Other fields are quoted only when
/// they contain a comma, quote, CR or LF. Quotes are doubled.
pub fn to_delimited<'a, I>(submissions: I) -> String
where
    I: IntoIterator<Item = &'a Submission>,
{
    let mut out = String::new();
    out.push_str(&CSV_HEADER.join(","));
    out.push('\n');

    for submission in submissions {
        let responses = submission.responses();
        let cells = [
            field(&submission.submission_id().to_string()),
            field(&submission.timestamp().to_rfc3339()),
            field(&submission.category_code().to_string()),
            field(submission.nickname()),
            field(&responses.multi_values(PREFERRED_EXPERTS).join(EXPERT_SEPARATOR)),
            quoted(responses.text_value(NEW_SERVICE).unwrap_or_default()),
            quoted(responses.text_value(PREVIOUS_FEEDBACK).unwrap_or_default()),
            field(responses.single_value(FEE).unwrap_or_default()),
        ];
        out.push_str(&cells.join(","));
        out.push('\n');
    }

    out
}

fn field(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        quoted(value)
    } else {
        value.to_string()
    }
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Pretty JSON array with every persisted field verbatim.
pub fn to_structured(submissions: &[Submission]) -> Result<String, ExportError> {
    serde_json::to_string_pretty(submissions).map_err(ExportError::Encode)
}

/// Parses a structured export back into submissions.
pub fn from_structured(payload: &str) -> Result<Vec<Submission>, ExportError> {
    let submissions: Vec<Submission> =
        serde_json::from_str(payload).map_err(ExportError::InvalidPayload)?;

    let mut seen = HashSet::with_capacity(submissions.len());
    for submission in &submissions {
        if !seen.insert(submission.submission_id()) {
            return Err(ExportError::DuplicateSubmission(submission.submission_id()));
        }
    }

    Ok(submissions)
}
