pub mod http;
pub mod storage;

use std::sync::Arc;

use org_config_sdk::ConfigStoreClient;

use crate::config::{StoreConfig, StoreKind};
use storage::{FileConfigStore, InMemoryConfigStore};

/// Build the store backing the REST API.
#[must_use]
pub fn build_store(config: &StoreConfig) -> Arc<dyn ConfigStoreClient> {
    match config.kind {
        StoreKind::Memory => {
            tracing::info!("Using in-memory config store");
            Arc::new(InMemoryConfigStore::new())
        }
        StoreKind::File => {
            tracing::info!(path = %config.path.display(), "Using file config store");
            Arc::new(FileConfigStore::new(config.path.clone()))
        }
    }
}
