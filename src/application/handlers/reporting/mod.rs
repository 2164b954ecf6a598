//! Reporting handlers.

mod console;
mod errors;

pub use console::{ImportSummary, ReportingConsole};
pub use errors::ReportingError;
