//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SubmissionStore` - Per-respondent submission persistence and change feed
//! - `IdentityProvider` - Resolves the current respondent
//! - `AdminAuthorizer` - Gates the reporting console

mod admin_authorizer;
mod identity_provider;
mod submission_store;

pub use admin_authorizer::AdminAuthorizer;
pub use identity_provider::IdentityProvider;
pub use submission_store::{SubmissionFeed, SubmissionStore};
