//! Stockwatch - market movers, charts and local watchlists
//!
//! Normalizes quote provider responses into typed records, turns price
//! history into chart series, and keeps user watchlists in local storage.

pub mod chart;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod services;
pub mod state;
pub mod storage;
pub mod watchlist;

pub use config::Config;
pub use error::{AppError, Result};
pub use models::{Stock, Watchlist};
pub use state::AppState;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
///
/// Filter comes from `RUST_LOG`, defaulting to debug output for this crate.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let initialized = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockwatch=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if initialized.is_ok() {
        tracing::info!("Starting Stockwatch...");
    }
}
