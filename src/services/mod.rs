//! Services Layer
//!
//! The call-site logic between consumers and the provider/storage layers:
//! fetch, map provider records into domain models, and decide how failures
//! degrade.
//!
//! # Architecture
//!
//! ```text
//! Consumer --> Services ──┬──> QuoteProvider --> Normalizer
//!                         └──> WatchlistStore --> KeyValueStore
//! ```
//!
//! # Services
//!
//! - `MarketService` - Top gainers, losers, most traded
//! - `SymbolService` - Symbol search
//! - `StockService` - Company overview, details view
//! - `ChartService` - Closing-price series per chart range
//! - `WatchlistService` - Create watchlists, save stocks to them

pub mod market_service;
pub mod symbol_service;
pub mod stock_service;
pub mod chart_service;
pub mod watchlist_service;

// Re-export commonly used types and services
pub use market_service::{MarketService, MarketSnapshot, HOME_PREVIEW_LEN};
pub use symbol_service::SymbolService;
pub use stock_service::{StockDetails, StockService};
pub use chart_service::ChartService;
pub use watchlist_service::WatchlistService;
