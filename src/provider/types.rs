//! Common quote provider types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of the top gainers / losers / most traded lists
///
/// Every numeric-looking field stays a string; the provider sends them that way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerChangeItem {
    pub ticker: String,
    pub price: String,
    pub change_amount: String,
    pub change_percentage: String,
    pub volume: String,
}

/// Top movers of the trading day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopMoversResponse {
    pub metadata: Option<String>,
    pub last_updated: Option<String>,
    pub top_gainers: Vec<TickerChangeItem>,
    pub top_losers: Vec<TickerChangeItem>,
    pub most_actively_traded: Vec<TickerChangeItem>,
}

/// Company overview
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockOverview {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Sector")]
    pub sector: Option<String>,
    #[serde(rename = "Industry")]
    pub industry: Option<String>,
    #[serde(rename = "MarketCapitalization")]
    pub market_capitalization: Option<String>,
    #[serde(rename = "PERatio")]
    pub pe_ratio: Option<String>,
    #[serde(rename = "Beta")]
    pub beta: Option<String>,
    #[serde(rename = "DividendYield")]
    pub dividend_yield: Option<String>,
    #[serde(rename = "ProfitMargin")]
    pub profit_margin: Option<String>,
    #[serde(rename = "52WeekHigh")]
    pub week52_high: Option<String>,
    #[serde(rename = "52WeekLow")]
    pub week52_low: Option<String>,
}

/// Time series keyed by timestamp, each bucket keyed by field label
/// (`1. open`, `4. close`, ...)
///
/// Keys iterate in ascending lexical order, which is chronological for the
/// provider's fixed-width timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub entries: BTreeMap<String, BTreeMap<String, String>>,
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Which series endpoint to query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSeriesKind {
    Intraday,
    Daily,
    Monthly,
}

impl TimeSeriesKind {
    /// Provider function name
    pub fn function(&self) -> &'static str {
        match self {
            TimeSeriesKind::Intraday => "TIME_SERIES_INTRADAY",
            TimeSeriesKind::Daily => "TIME_SERIES_DAILY",
            TimeSeriesKind::Monthly => "TIME_SERIES_MONTHLY",
        }
    }

    /// Key the series object is wrapped under in the response body
    pub fn response_key(&self, intraday_interval: &str) -> String {
        match self {
            TimeSeriesKind::Intraday => format!("Time Series ({})", intraday_interval),
            TimeSeriesKind::Daily => "Time Series (Daily)".to_string(),
            TimeSeriesKind::Monthly => "Monthly Time Series".to_string(),
        }
    }
}

/// One symbol search hit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolMatch {
    pub symbol: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub region: String,
    pub currency: String,
}
