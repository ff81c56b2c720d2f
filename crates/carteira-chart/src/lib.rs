#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Price chart panel core for Carteira.
//!
//! This crate turns ticker symbols and a period selector into a chart-ready
//! configuration. It holds the ordered set of displayed tickers
//! ([`SeriesStore`]), derives the rendering widget's configuration from it
//! ([`ChartOptions`]), and drives both through the user-facing operations
//! of [`ChartPanel`]: search, add ticker, switch period.
//!
//! Rendering itself is out of scope; the panel's output is the serialized
//! options object an external chart widget consumes.

/// The version of the carteira-chart crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod options;
pub mod panel;
pub mod store;

// Re-exports
pub use options::{ChartOptions, ChartSeries, ChartTitle, Tooltip, XAxis};
pub use panel::ChartPanel;
pub use store::SeriesStore;
