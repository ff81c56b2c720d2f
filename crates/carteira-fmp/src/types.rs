//! Wire types for FMP API responses.

use carteira_traits::{HistoricalRecord, PricePoint};
use serde::Deserialize;

use crate::{FmpError, Result};

/// Raw `historical-price-full` response payload.
///
/// A successful lookup carries `symbol` and a newest-first `historical`
/// array; an unknown ticker comes back as a payload with no `historical`
/// field at all. That presence check is the sole success/not-found
/// discriminator, so both fields deserialize as optional.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoricalPriceFull {
    /// Ticker symbol, echoed back by the API on success.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Daily price rows, newest first. Absent for unknown tickers.
    #[serde(default)]
    pub historical: Option<Vec<PricePoint>>,
}

impl HistoricalPriceFull {
    /// Convert the payload into a [`HistoricalRecord`] for `requested`.
    ///
    /// # Errors
    ///
    /// [`FmpError::TickerNotFound`] when the payload lacks a historical
    /// series.
    pub fn into_record(self, requested: &str) -> Result<HistoricalRecord> {
        let Some(historical) = self.historical else {
            return Err(FmpError::TickerNotFound(requested.to_uppercase()));
        };
        let symbol = self.symbol.unwrap_or_else(|| requested.to_uppercase());
        Ok(HistoricalRecord::new(symbol, historical))
    }
}
