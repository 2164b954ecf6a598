//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `quiz` - Question bank, session state machine and classifier
//! - `catalogue` - Category codes and their result profiles
//! - `survey` - Follow-up survey form, validation and sanitization
//! - `submission` - Persisted results and change events
//! - `reporting` - Filters, sort orders, aggregation and export

pub mod catalogue;
pub mod foundation;
pub mod quiz;
pub mod reporting;
pub mod submission;
pub mod survey;
