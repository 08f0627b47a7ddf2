//! Locally persisted watchlists
//!
//! The whole collection lives under one storage key as a JSON array and is
//! rewritten on every mutation. The in-memory copy only changes after a
//! write succeeds, so it always equals the last persisted snapshot.

mod selection;

use crate::error::{AppError, Result};
use crate::models::{Stock, Watchlist};
use crate::storage::KeyValueStore;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;

pub use selection::WatchlistSelection;

/// Storage key holding the serialized collection
pub const WATCHLIST_KEY: &str = "watchlists";

/// Check a user-entered watchlist name, returning it trimmed
pub fn validate_watchlist_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Watchlist name must not be blank".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Ordered collection of watchlists over a key-value store
pub struct WatchlistStore {
    storage: Arc<dyn KeyValueStore>,
    watchlists: RwLock<Vec<Watchlist>>,
}

impl WatchlistStore {
    /// Open the store, loading whatever is persisted
    pub fn open(storage: Arc<dyn KeyValueStore>) -> Self {
        let store = Self {
            storage,
            watchlists: RwLock::new(Vec::new()),
        };

        let loaded = store.load();
        tracing::info!("Loaded {} watchlists", loaded.len());
        *store.watchlists.write() = loaded;

        store
    }

    /// Read the persisted collection
    ///
    /// Absent, unreadable or undecodable state all yield an empty collection.
    pub fn load(&self) -> Vec<Watchlist> {
        let raw = match self.storage.get(WATCHLIST_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read watchlists, starting empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(watchlists) => watchlists,
            Err(e) => {
                tracing::warn!("Stored watchlists are corrupt, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Snapshot of the in-memory collection
    pub fn list(&self) -> Vec<Watchlist> {
        self.watchlists.read().clone()
    }

    pub fn get(&self, id: i64) -> Option<Watchlist> {
        self.watchlists.read().iter().find(|w| w.id == id).cloned()
    }

    /// Ids of the watchlists already holding `stock`
    pub fn watchlists_containing(&self, stock: &Stock) -> HashSet<i64> {
        self.watchlists
            .read()
            .iter()
            .filter(|w| w.contains(stock))
            .map(|w| w.id)
            .collect()
    }

    /// Append a new, empty watchlist with the next free id
    ///
    /// The name is stored as given.
    pub fn create(&self, name: &str) -> Result<Watchlist> {
        let mut watchlists = self.watchlists.write();

        let id = watchlists.iter().map(|w| w.id).max().unwrap_or(0) + 1;
        let watchlist = Watchlist::new(id, name);

        let mut updated = watchlists.clone();
        updated.push(watchlist.clone());
        self.persist(&updated)?;
        *watchlists = updated;

        tracing::info!("Created watchlist {} ({})", id, name);
        Ok(watchlist)
    }

    /// Add `stock` to every listed watchlist that does not hold it yet
    pub fn add_stock(&self, ids: &HashSet<i64>, stock: &Stock) -> Result<()> {
        if !stock.has_valid_price() {
            return Err(AppError::Validation(format!(
                "Price of {} is not a finite number",
                stock.symbol
            )));
        }

        let mut watchlists = self.watchlists.write();

        let updated: Vec<Watchlist> = watchlists
            .iter()
            .map(|w| {
                if ids.contains(&w.id) && !w.contains(stock) {
                    let mut w = w.clone();
                    w.stocks.push(stock.clone());
                    w
                } else {
                    w.clone()
                }
            })
            .collect();

        self.persist(&updated)?;
        *watchlists = updated;

        tracing::info!("Saved {} to watchlists {:?}", stock.symbol, ids);
        Ok(())
    }

    /// Replace the stored collection
    fn persist(&self, watchlists: &[Watchlist]) -> Result<()> {
        let json = serde_json::to_string(watchlists)?;
        self.storage.set(WATCHLIST_KEY, &json)
    }
}
