//! Chart configuration and the store-to-chart projection.
//!
//! [`ChartOptions`] mirrors the configuration object the external rendering
//! widget consumes: a title, a shared category axis, tooltip formatting, and
//! one value series per displayed ticker. Only the axis and the series are
//! derived; everything else is fixed at construction.

use carteira_traits::HistoricalRecord;
use serde::Serialize;

use crate::store::SeriesStore;

/// Chart title block.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartTitle {
    /// Title text. Empty by default; the host layout carries the heading.
    pub text: String,
}

/// The shared x-axis: one date label per position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct XAxis {
    /// Date labels in chronological order, taken from the first record.
    pub categories: Vec<String>,
}

/// Tooltip value formatting. Fixed: two decimals, `$` prefix, `USD` suffix.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    /// Decimal places shown for each value.
    pub value_decimals: u8,
    /// Prefix prepended to each value.
    pub value_prefix: String,
    /// Suffix appended to each value.
    pub value_suffix: String,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            value_decimals: 2,
            value_prefix: "$".to_string(),
            value_suffix: " USD".to_string(),
        }
    }
}

/// One plotted series: a ticker's closing prices in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// Legend name, the ticker symbol.
    pub name: String,
    /// Closing prices, index-aligned with the axis categories.
    pub data: Vec<f64>,
}

impl ChartSeries {
    fn from_record(record: &HistoricalRecord) -> Self {
        Self {
            name: record.symbol.clone(),
            data: record.chronological().map(|p| p.close).collect(),
        }
    }
}

/// The chart-ready configuration derived from a [`SeriesStore`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    /// Title block (fixed).
    pub title: ChartTitle,
    /// Shared date axis (derived).
    pub x_axis: XAxis,
    /// Tooltip formatting (fixed).
    pub tooltip: Tooltip,
    /// One entry per displayed ticker, in display order (derived).
    pub series: Vec<ChartSeries>,
}

impl ChartOptions {
    /// Recompute the derived fields from `store`.
    ///
    /// The axis categories come from the first record's dates, reversed to
    /// chronological order; each record contributes one series of
    /// chronological closing prices. Positional index is the only
    /// correspondence between categories and series values: records whose
    /// ranges differ from the first record's are not aligned or
    /// interpolated, they silently shift against the axis.
    ///
    /// An empty store is a no-op; the previous projection is retained.
    pub fn apply(&mut self, store: &SeriesStore) {
        let Some(first) = store.records().first() else {
            return;
        };

        self.x_axis.categories = first.chronological().map(|p| p.date.clone()).collect();
        self.series = store.records().iter().map(ChartSeries::from_record).collect();
    }
}
