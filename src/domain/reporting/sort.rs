//! Sort orders for the reporting view.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;
use crate::domain::submission::Submission;

/// Display order of submissions. Every order is total: ties fall back to
/// the submission id so repeated sorts are stable across reloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    ByCategory,
}

impl SortOrder {
    pub fn compare(&self, a: &Submission, b: &Submission) -> Ordering {
        let by_id = a.submission_id().cmp(&b.submission_id());
        match self {
            SortOrder::Newest => b.timestamp().cmp(a.timestamp()).then(by_id),
            SortOrder::Oldest => a.timestamp().cmp(b.timestamp()).then(by_id),
            SortOrder::ByCategory => a
                .category_code()
                .cmp(&b.category_code())
                .then_with(|| b.timestamp().cmp(a.timestamp()))
                .then(by_id),
        }
    }

    pub fn sort(&self, submissions: &mut [Submission]) {
        submissions.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::ByCategory => "by_category",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "by_category" | "category" => Ok(SortOrder::ByCategory),
            other => Err(ValidationError::invalid_format(
                "sort_order",
                format!("unknown sort order '{}'", other),
            )),
        }
    }
}
