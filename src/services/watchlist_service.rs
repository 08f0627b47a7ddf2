//! Watchlist Service
//!
//! Caller-side rules around the watchlist store: name validation on create
//! and saving a stock to the picker's selection.

use crate::error::{AppError, Result};
use crate::models::{Stock, Watchlist};
use crate::state::AppState;
use crate::watchlist::{validate_watchlist_name, WatchlistSelection};
use tracing::info;

/// Watchlist service for business logic
pub struct WatchlistService;

impl WatchlistService {
    /// All watchlists in creation order
    pub fn list(state: &AppState) -> Vec<Watchlist> {
        state.watchlists.list()
    }

    pub fn get(state: &AppState, id: i64) -> Result<Watchlist> {
        state
            .watchlists
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Watchlist {} not found", id)))
    }

    /// Create a watchlist from a user-entered name
    pub fn create(state: &AppState, name: &str) -> Result<Watchlist> {
        let name = validate_watchlist_name(name)?;
        info!("WatchlistService::create - {}", name);

        state.watchlists.create(&name)
    }

    /// Picker selection pre-checked with the watchlists holding `stock`
    pub fn selection_for(state: &AppState, stock: &Stock) -> WatchlistSelection {
        WatchlistSelection::with_checked(state.watchlists.watchlists_containing(stock))
    }

    /// Save `stock` into every checked watchlist
    pub fn save_stock(state: &AppState, selection: &WatchlistSelection, stock: &Stock) -> Result<()> {
        info!(
            "WatchlistService::save_stock - {} into {} watchlists",
            stock.symbol,
            selection.ids().len()
        );

        state.watchlists.add_stock(selection.ids(), stock)
    }
}
