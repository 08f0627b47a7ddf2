//! Application state management

use crate::config::Config;
use crate::error::Result;
use crate::provider::{AlphaVantageClient, QuoteProvider};
use crate::storage::{self, KeyValueStore};
use crate::watchlist::WatchlistStore;
use std::sync::Arc;

/// Application state shared across all services
pub struct AppState {
    /// Configuration the state was built from
    pub config: Config,

    /// Quote provider client
    pub provider: Arc<dyn QuoteProvider>,

    /// Persisted watchlists
    pub watchlists: WatchlistStore,
}

impl AppState {
    /// Build state from configuration: provider client plus configured storage
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let provider = Arc::new(AlphaVantageClient::new(&config.provider)?);
        let storage = storage::open(&config.storage)?;

        tracing::info!("Using quote provider {}", provider.name());
        Ok(Self::with_parts(config, provider, storage))
    }

    /// Build state from already constructed parts
    pub fn with_parts(
        config: Config,
        provider: Arc<dyn QuoteProvider>,
        storage: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            config,
            provider,
            watchlists: WatchlistStore::open(storage),
        }
    }
}
