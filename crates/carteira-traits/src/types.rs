//! Common types shared across the Carteira workspace.
//!
//! These mirror the wire shapes of the upstream price service closely: a
//! [`HistoricalRecord`] is one ticker's raw fetch result, newest first, and
//! chronological views are always computed rather than stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A market symbol identifier, e.g. "AAPL" or "MSFT".
pub type Symbol = String;

/// One daily closing price as returned by the price service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date in `YYYY-MM-DD` form.
    pub date: String,
    /// Closing price in USD.
    pub close: f64,
}

impl PricePoint {
    /// Parse the date string into a [`NaiveDate`].
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// One ticker's raw historical price series.
///
/// The `historical` sequence arrives newest-first from the price service and
/// is kept that way; use [`HistoricalRecord::chronological`] for
/// oldest-first iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    /// Ticker symbol this series belongs to.
    pub symbol: Symbol,
    /// Daily closing prices, newest first.
    pub historical: Vec<PricePoint>,
}

impl HistoricalRecord {
    /// Create a record from a symbol and a newest-first price series.
    #[must_use]
    pub fn new(symbol: impl Into<Symbol>, historical: Vec<PricePoint>) -> Self {
        Self {
            symbol: symbol.into(),
            historical,
        }
    }

    /// Iterate the price series in chronological (oldest-first) order.
    pub fn chronological(&self) -> impl Iterator<Item = &PricePoint> {
        self.historical.iter().rev()
    }
}

/// Severity tag for a [`Toast`] notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastStatus {
    /// Something went wrong; shown in the error style.
    Error,
    /// Informational notice.
    Info,
    /// Cautionary notice.
    Warning,
    /// Confirmation of a completed action.
    Success,
}

/// How long a toast stays on screen before auto-dismissing.
pub const TOAST_DURATION_MS: u64 = 9_000;

/// A dismissible, auto-expiring notification for the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    /// Short headline, e.g. "Oops".
    pub title: String,
    /// Human-readable message body.
    pub description: String,
    /// Display severity.
    pub status: ToastStatus,
    /// Time on screen in milliseconds.
    pub duration: u64,
    /// Whether the user may dismiss the toast early.
    pub is_closable: bool,
}

impl Toast {
    /// Build an error toast with the default duration.
    #[must_use]
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: ToastStatus::Error,
            duration: TOAST_DURATION_MS,
            is_closable: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_date() {
        let point = PricePoint {
            date: "2024-02-14".to_string(),
            close: 182.3,
        };
        assert_eq!(
            point.parsed_date(),
            NaiveDate::from_ymd_opt(2024, 2, 14)
        );

        let bad = PricePoint {
            date: "14/02/2024".to_string(),
            close: 1.0,
        };
        assert!(bad.parsed_date().is_none());
    }

    #[test]
    fn test_chronological_reverses_wire_order() {
        let record = HistoricalRecord::new(
            "AAPL",
            vec![
                PricePoint { date: "2024-02-14".into(), close: 3.0 },
                PricePoint { date: "2024-02-13".into(), close: 2.0 },
                PricePoint { date: "2024-02-12".into(), close: 1.0 },
            ],
        );
        let closes: Vec<f64> = record.chronological().map(|p| p.close).collect();
        assert_eq!(closes, vec![1.0, 2.0, 3.0]);
        // The stored series stays newest-first.
        assert_eq!(record.historical[0].close, 3.0);
    }

    #[test]
    fn test_error_toast_defaults() {
        let toast = Toast::error("Oops", "something broke");
        assert_eq!(toast.status, ToastStatus::Error);
        assert_eq!(toast.duration, TOAST_DURATION_MS);
        assert!(toast.is_closable);
    }

    #[test]
    fn test_toast_serializes_camel_case() {
        let toast = Toast::error("Oops", "m");
        let json = serde_json::to_value(&toast).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["duration"], 9000);
        assert_eq!(json["isClosable"], true);
    }
}
