//! Market Service
//!
//! Top gainers, losers and most traded stocks for the home screen.

use crate::error::Result;
use crate::models::Stock;
use crate::provider::types::{TickerChangeItem, TopMoversResponse};
use crate::state::AppState;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Number of gainers and losers shown on the home screen
pub const HOME_PREVIEW_LEN: usize = 4;

/// Top movers mapped into stocks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub last_updated: Option<String>,
    pub gainers: Vec<Stock>,
    pub losers: Vec<Stock>,
    pub most_active: Vec<Stock>,
}

impl MarketSnapshot {
    pub fn from_top_movers(movers: &TopMoversResponse) -> Self {
        let to_stocks = |items: &[TickerChangeItem]| -> Vec<Stock> {
            items.iter().map(Stock::from_ticker).collect()
        };

        Self {
            last_updated: movers.last_updated.clone(),
            gainers: to_stocks(&movers.top_gainers),
            losers: to_stocks(&movers.top_losers),
            most_active: to_stocks(&movers.most_actively_traded),
        }
    }

    /// First `n` gainers and losers
    pub fn preview(&self, n: usize) -> (&[Stock], &[Stock]) {
        let gainers = &self.gainers[..n.min(self.gainers.len())];
        let losers = &self.losers[..n.min(self.losers.len())];
        (gainers, losers)
    }

    pub fn is_empty(&self) -> bool {
        self.gainers.is_empty() && self.losers.is_empty() && self.most_active.is_empty()
    }
}

/// Market service for business logic
pub struct MarketService;

impl MarketService {
    /// Fetch top movers, propagating failures
    pub async fn top_movers(state: &AppState) -> Result<MarketSnapshot> {
        info!("MarketService::top_movers");

        let movers = state.provider.top_movers().await?;
        Ok(MarketSnapshot::from_top_movers(&movers))
    }

    /// Fetch top movers; any failure yields an empty snapshot
    pub async fn snapshot(state: &AppState) -> MarketSnapshot {
        match Self::top_movers(state).await {
            Ok(snapshot) => {
                info!(
                    "Top movers: {} gainers, {} losers, {} most active",
                    snapshot.gainers.len(),
                    snapshot.losers.len(),
                    snapshot.most_active.len()
                );
                snapshot
            }
            Err(e) => {
                error!("Failed to fetch top movers: {}", e);
                MarketSnapshot::default()
            }
        }
    }
}
