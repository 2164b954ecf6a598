//! Admin authorizer adapters.

mod passphrase;

pub use passphrase::PassphraseAuthorizer;
