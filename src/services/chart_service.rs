//! Chart Service
//!
//! Closing-price sequences for the details chart.

use crate::chart::{extract_closes, select_range, ChartRange, ChartWindow};
use crate::error::Result;
use crate::state::AppState;
use tracing::{info, warn};

/// Chart service for business logic
pub struct ChartService;

impl ChartService {
    /// Fetch the range's source series and reduce it to closing prices
    pub async fn fetch_closes(
        state: &AppState,
        symbol: &str,
        range: ChartRange,
        window: ChartWindow,
    ) -> Result<Vec<f64>> {
        info!(
            "ChartService::fetch_closes - {} {} ({:?})",
            symbol,
            range.label(),
            window
        );

        let series = state.provider.time_series(symbol, range.source()).await?;
        let closes = extract_closes(&series);

        Ok(select_range(closes, range, window))
    }

    /// Closes for the configured `chart.window`, degrading any failure to an
    /// empty sequence
    pub async fn closes(state: &AppState, symbol: &str, range: ChartRange) -> Vec<f64> {
        let window = state.config.chart.window;
        match Self::fetch_closes(state, symbol, range, window).await {
            Ok(closes) => closes,
            Err(e) => {
                warn!("Chart data unavailable for {} {}: {}", symbol, range.label(), e);
                Vec::new()
            }
        }
    }
}
