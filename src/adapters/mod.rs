//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `store` - Submission stores (in-memory, YAML files)
//! - `identity` - Respondent identity providers
//! - `admin` - Admin authorizers
//!
//! `PetsonaAppState` wires them together from `AppConfig`.

pub mod admin;
mod app_state;
pub mod identity;
pub mod store;

pub use admin::PassphraseAuthorizer;
pub use app_state::PetsonaAppState;
pub use identity::{AnonymousIdentityProvider, FixedIdentityProvider};
pub use store::{store_from_config, ChangeFeedHub, FileSubmissionStore, InMemorySubmissionStore};
