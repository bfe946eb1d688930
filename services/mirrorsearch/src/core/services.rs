//! Unified service container for mirrorsearch
//!
//! Provides shared access to the stores and configuration.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::indexer::IndexingPipeline;
use crate::core::search::QueryClient;
use crate::core::storage::{IndexStore, RawPageStore};
use std::sync::Arc;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Raw page records
    pub raw: Arc<RawPageStore>,

    /// Word index files
    pub indices: Arc<IndexStore>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let raw = Arc::new(RawPageStore::new(config.paths.raw_dir.clone()));
        let indices = Arc::new(IndexStore::new(config.paths.indices_dir.clone()));

        Self {
            raw,
            indices,
            config: Arc::new(config),
        }
    }

    /// Create an IndexingPipeline over the configured directories
    pub fn create_pipeline(&self) -> Result<IndexingPipeline> {
        IndexingPipeline::with_stores(
            &self.config,
            RawPageStore::clone(&self.raw),
            IndexStore::clone(&self.indices),
        )
    }

    /// Create a QueryClient, over HTTP when `remote` is set and over
    /// the local directories otherwise
    pub fn create_query_client(&self, remote: bool) -> Result<QueryClient> {
        if remote {
            QueryClient::http(&self.config)
        } else {
            Ok(QueryClient::directory(&self.config))
        }
    }
}
