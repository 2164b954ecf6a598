//! Application handlers.
//!
//! Command handlers and long-lived services that orchestrate domain
//! operations over the ports.

pub mod admin;
pub mod quiz;
pub mod reporting;
pub mod survey;
