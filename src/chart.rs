//! Closing-price extraction and chart range policy

use crate::provider::types::{TimeSeries, TimeSeriesKind};
use serde::{Deserialize, Serialize};

/// Field label holding the closing price in every series bucket
pub const CLOSE_LABEL: &str = "4. close";

/// Closing prices in ascending timestamp order
///
/// Buckets without a parsable, finite close are dropped, never substituted,
/// so the result is never longer than the series.
pub fn extract_closes(series: &TimeSeries) -> Vec<f64> {
    series
        .entries
        .values()
        .filter_map(|fields| fields.get(CLOSE_LABEL))
        .filter_map(|raw| raw.trim().parse::<f64>().ok())
        .filter(|close| close.is_finite())
        .collect()
}

/// Chart range offered by the range selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartRange {
    OneDay,
    OneWeek,
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl ChartRange {
    pub const ALL: [ChartRange; 6] = [
        ChartRange::OneDay,
        ChartRange::OneWeek,
        ChartRange::OneMonth,
        ChartRange::ThreeMonths,
        ChartRange::SixMonths,
        ChartRange::OneYear,
    ];

    /// Range for a selector position; anything past the end is a monthly range
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(ChartRange::OneYear)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartRange::OneDay => "1D",
            ChartRange::OneWeek => "1W",
            ChartRange::OneMonth => "1M",
            ChartRange::ThreeMonths => "3M",
            ChartRange::SixMonths => "6M",
            ChartRange::OneYear => "1Y",
        }
    }

    /// Series the range is drawn from
    pub fn source(&self) -> TimeSeriesKind {
        match self {
            ChartRange::OneDay => TimeSeriesKind::Intraday,
            ChartRange::OneWeek | ChartRange::OneMonth | ChartRange::ThreeMonths => {
                TimeSeriesKind::Daily
            }
            ChartRange::SixMonths | ChartRange::OneYear => TimeSeriesKind::Monthly,
        }
    }

    /// Number of daily points kept, `None` for the whole series
    pub fn point_limit(&self) -> Option<usize> {
        match self {
            ChartRange::OneWeek => Some(7),
            ChartRange::OneMonth => Some(22),
            ChartRange::ThreeMonths => Some(66),
            ChartRange::OneDay | ChartRange::SixMonths | ChartRange::OneYear => None,
        }
    }
}

/// Which end of an ascending series a point limit keeps
///
/// `Oldest` keeps the first N points of the series, which for a daily
/// series is the start of the provider's window rather than the latest
/// trading days. It stays the default until product decides otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartWindow {
    #[default]
    Oldest,
    Latest,
}

/// Apply the range's point limit to an ascending close sequence
pub fn select_range(mut closes: Vec<f64>, range: ChartRange, window: ChartWindow) -> Vec<f64> {
    let Some(limit) = range.point_limit() else {
        return closes;
    };

    match window {
        ChartWindow::Oldest => {
            closes.truncate(limit);
            closes
        }
        ChartWindow::Latest => {
            let skip = closes.len().saturating_sub(limit);
            closes.split_off(skip)
        }
    }
}
