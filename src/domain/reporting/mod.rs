//! Reporting module - filtering, ordering, aggregation and export of
//! submissions. Everything here is pure; the live view lives in
//! `application::reporting`.

mod aggregate;
mod export;
mod query;
mod sort;

pub use aggregate::AggregateReport;
pub use export::{
    from_structured, to_delimited, to_structured, ExportError, CSV_HEADER, EXPERT_SEPARATOR,
};
pub use query::{CategoryFilter, SubmissionQuery};
pub use sort::SortOrder;
