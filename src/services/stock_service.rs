//! Stock Service
//!
//! Company overview and the combined details view of a single stock.

use crate::chart::ChartRange;
use crate::models::Stock;
use crate::provider::types::StockOverview;
use crate::services::ChartService;
use crate::state::AppState;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Everything the details view shows for one stock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockDetails {
    pub stock: Stock,
    pub overview: Option<StockOverview>,
    pub range: ChartRange,
    pub closes: Vec<f64>,
    /// Watchlists already holding this stock
    pub watchlist_ids: Vec<i64>,
}

/// Stock service for business logic
pub struct StockService;

impl StockService {
    /// Company overview; `None` when it cannot be fetched
    pub async fn overview(state: &AppState, symbol: &str) -> Option<StockOverview> {
        info!("StockService::overview - {}", symbol);

        match state.provider.overview(symbol).await {
            Ok(overview) => Some(overview),
            Err(e) => {
                warn!("Overview unavailable for {}: {}", symbol, e);
                None
            }
        }
    }

    /// Overview and chart, fetched concurrently
    pub async fn details(state: &AppState, stock: &Stock, range: ChartRange) -> StockDetails {
        let (overview, closes) = tokio::join!(
            Self::overview(state, &stock.symbol),
            ChartService::closes(state, &stock.symbol, range),
        );

        let mut watchlist_ids: Vec<i64> = state
            .watchlists
            .watchlists_containing(stock)
            .into_iter()
            .collect();
        watchlist_ids.sort_unstable();

        StockDetails {
            stock: stock.clone(),
            overview,
            range,
            closes,
            watchlist_ids,
        }
    }
}
