#![doc(issue_tracker_base_url = "https://github.com/carteira-app/carteira/issues/")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # carteira
//!
//! Stock price chart pipeline: search a ticker, plot its historical closing
//! prices, overlay additional tickers, switch the aggregation period.
//!
//! carteira is an umbrella crate that re-exports the carteira sub-crates for
//! convenience. The pipeline runs in four steps:
//!
//! 1. A [`Period`] resolves to a calendar [`DateRange`]
//! 2. A [`PriceSource`] (the FMP client in production) fetches the ticker's
//!    daily closing prices over that range
//! 3. The panel's series store collects the raw records in display order
//! 4. The store is projected into [`ChartOptions`], the configuration an
//!    external chart widget consumes
//!
//! ## Quick Start
//!
//! ```ignore
//! use carteira::{ChartPanel, FmpClient, PanelObserver, Period, Toast};
//!
//! struct Wallet;
//!
//! impl PanelObserver for Wallet {
//!     fn stock_searched(&mut self, symbol: &str) {
//!         println!("searched {symbol}");
//!     }
//!     fn toast(&mut self, toast: Toast) {
//!         eprintln!("{}: {}", toast.title, toast.description);
//!     }
//! }
//!
//! # async fn example() -> carteira::Result<()> {
//! let client = FmpClient::from_env().map_err(carteira::CarteiraError::from)?;
//! let mut panel = ChartPanel::new(client, Box::new(Wallet));
//!
//! panel.search("AAPL").await?;
//! panel.set_search_term("MSFT");
//! panel.append().await?;
//! panel.set_period(Period::Week).await?;
//!
//! let options = panel.options(); // feed this to the chart widget
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Shared types and the [`PriceSource`] / [`PanelObserver`] seams
//! - [`chart`] - Series store, chart projection, and the panel operations
//! - [`fmp`] - Financial Modeling Prep price-history client

/// Version information for the carteira crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shared types and seam traits.
pub mod traits {
    pub use carteira_traits::*;
}

/// Panel core: store, projection, operations.
pub mod chart {
    pub use carteira_chart::*;
}

/// Financial Modeling Prep API client.
pub mod fmp {
    pub use carteira_fmp::*;
}

// Re-export the common surface at top level for convenience
pub use carteira_chart::{ChartOptions, ChartPanel, ChartSeries, SeriesStore};
pub use carteira_fmp::{FmpClient, FmpError};
pub use carteira_traits::{
    CarteiraError, DateRange, HistoricalRecord, PanelObserver, Period, PricePoint, PriceSource,
    Result, Symbol, Toast, ToastStatus,
};
