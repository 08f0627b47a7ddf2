//! Quote provider adapters

pub mod types;
pub mod alpha_vantage;

use crate::error::Result;
use async_trait::async_trait;
use types::*;

pub use alpha_vantage::AlphaVantageClient;

/// Quote provider trait that all provider implementations must implement
///
/// Each call is one request/response round trip. Callers decide how a
/// failure degrades.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Provider ID (e.g., "alphavantage")
    fn id(&self) -> &'static str;

    /// Provider display name
    fn name(&self) -> &'static str;

    /// Top gainers, losers and most traded symbols
    async fn top_movers(&self) -> Result<TopMoversResponse>;

    /// Company overview for a symbol
    async fn overview(&self, symbol: &str) -> Result<StockOverview>;

    /// Price history for a symbol
    async fn time_series(&self, symbol: &str, kind: TimeSeriesKind) -> Result<TimeSeries>;

    /// Symbol search by keywords
    async fn search_symbols(&self, keywords: &str) -> Result<Vec<SymbolMatch>>;
}
