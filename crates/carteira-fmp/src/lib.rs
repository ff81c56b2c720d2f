#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Financial Modeling Prep (FMP) API client for Carteira.
//!
//! This crate fetches historical daily closing prices from the
//! [Financial Modeling Prep](https://financialmodelingprep.com/) API and
//! implements the [`PriceSource`](carteira_traits::PriceSource) seam the
//! chart panel is built against.
//!
//! # Usage
//!
//! ```rust,ignore
//! use carteira_fmp::FmpClient;
//! use carteira_traits::{DateRange, Period};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FmpClient::from_env()?;
//!
//!     let range = DateRange::resolve(Period::Month);
//!     let record = client.historical_price_full("AAPL", &range).await?;
//!
//!     println!("{}: {} closing prices", record.symbol, record.historical.len());
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FMP_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! FMP_API_KEY=your_api_key_here
//! ```

mod client;
mod error;
mod types;

pub use client::FmpClient;
pub use error::FmpError;
pub use types::HistoricalPriceFull;

/// Result type for FMP operations.
pub type Result<T> = std::result::Result<T, FmpError>;
