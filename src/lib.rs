//! Petsona - pet personality questionnaire and owner survey.
//!
//! A respondent answers twelve forced-choice questions about their pet. The
//! answers are classified into one of sixteen four-letter category codes,
//! each with a descriptive profile. A short follow-up survey is validated,
//! sanitized and stored per respondent. An administrator behind a
//! passphrase gate can filter, sort, aggregate, export and reset the
//! stored submissions.
//!
//! The crate follows a hexagonal layout: `domain` holds the pure rules,
//! `ports` the traits for storage and identity, `adapters` their
//! implementations, and `application` the handlers that tie them together.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
