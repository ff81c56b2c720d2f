//! The price-source seam.

use async_trait::async_trait;

use crate::{DateRange, HistoricalRecord, Result};

/// A source of historical daily closing prices.
///
/// This is the seam between the chart panel and whatever backs it: the real
/// HTTP client in production, a canned fixture in tests. Implementations
/// must not mutate shared state; the caller decides what to do with the
/// returned record.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch `symbol`'s daily closing prices over `range` (inclusive bounds).
    ///
    /// Returns the raw record in the service's newest-first ordering.
    ///
    /// # Errors
    ///
    /// [`CarteiraError::TickerNotFound`](crate::CarteiraError::TickerNotFound)
    /// when the service has no historical series for the symbol; other
    /// variants for transport and decoding failures, which callers propagate
    /// unrecovered.
    async fn historical(&self, symbol: &str, range: &DateRange) -> Result<HistoricalRecord>;
}
