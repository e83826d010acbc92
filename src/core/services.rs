//! Unified service container for Kotoba
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::search::SearchService;
use crate::core::storage::{DictionaryStore, SqliteStore};
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Read-only dictionary store
    pub store: Arc<dyn DictionaryStore>,

    /// Two-pass dictionary search
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Open the configured dictionary database and build services on it
    pub fn new(config: Config) -> Result<Self> {
        let store = Arc::new(SqliteStore::open(&config.storage.database_path)?);
        Ok(Self::with_store(config, store))
    }

    /// Build services over an already opened store
    pub fn with_store(config: Config, store: Arc<dyn DictionaryStore>) -> Self {
        let search = Arc::new(SearchService::new(
            Arc::clone(&store),
            config.search.max_results,
            config.search.max_query_length,
        ));

        Self {
            store,
            search,
            config: Arc::new(config),
        }
    }
}
