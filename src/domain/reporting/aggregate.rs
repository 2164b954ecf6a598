//! Group-by-count tables over the full submission set.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::catalogue::CategoryCode;
use crate::domain::submission::Submission;
use crate::domain::survey::{FEE, PREFERRED_EXPERTS};

/// Counts per category code, per preferred expert and per fee band.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateReport {
    pub total: usize,
    pub by_category: BTreeMap<CategoryCode, usize>,
    /// Every selected label plus the "other" text when present.
    pub by_expert: BTreeMap<String, usize>,
    /// Unset fees are not counted.
    pub by_fee: BTreeMap<String, usize>,
}

impl AggregateReport {
    pub fn compute<'a, I>(submissions: I) -> Self
    where
        I: IntoIterator<Item = &'a Submission>,
    {
        let mut report = Self::default();

        for submission in submissions {
            report.total += 1;
            *report
                .by_category
                .entry(submission.category_code())
                .or_default() += 1;

            for expert in submission.responses().multi_values(PREFERRED_EXPERTS) {
                *report.by_expert.entry(expert.to_string()).or_default() += 1;
            }

            if let Some(fee) = submission.responses().single_value(FEE) {
                *report.by_fee.entry(fee.to_string()).or_default() += 1;
            }
        }

        report
    }

    pub fn category_count(&self, code: CategoryCode) -> usize {
        self.by_category.get(&code).copied().unwrap_or(0)
    }
}
