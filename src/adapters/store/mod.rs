//! Submission store adapters.
//!
//! - `InMemorySubmissionStore` - map-backed, for tests and ephemeral runs
//! - `FileSubmissionStore` - one YAML file per owner

mod feed;
mod file;
mod in_memory;

pub use feed::{ChangeFeedHub, DEFAULT_FEED_CAPACITY};
pub use file::FileSubmissionStore;
pub use in_memory::InMemorySubmissionStore;

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::ports::SubmissionStore;

/// Builds the store selected by configuration.
pub fn store_from_config(config: &StorageConfig) -> Arc<dyn SubmissionStore> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory submission store");
            Arc::new(InMemorySubmissionStore::new())
        }
        StorageBackend::File => {
            tracing::info!(data_dir = %config.data_dir.display(), "Using file submission store");
            Arc::new(FileSubmissionStore::new(&config.data_dir))
        }
    }
}
