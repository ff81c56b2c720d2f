//! Error types for the Carteira chart pipeline.
//!
//! A single error kind, [`CarteiraError::TickerNotFound`], is surfaced to the
//! user as a dismissible notification. Everything else propagates unrecovered
//! to the caller.

use thiserror::Error;

/// The main error type for Carteira operations.
#[derive(Debug, Error)]
pub enum CarteiraError {
    /// The price service returned no historical data for the ticker.
    ///
    /// This is the only error kind that is converted into a user-facing
    /// notification; all other variants propagate to the caller untouched.
    #[error("Ticker not found: {0}")]
    TickerNotFound(String),

    /// Error fetching data from the external price service.
    #[error("Data fetch error: {0}")]
    DataFetch(String),

    /// Error when a date is out of range or malformed.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl CarteiraError {
    /// Whether this error is the user-surfaced "ticker not found" kind.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::TickerNotFound(_))
    }
}

impl From<String> for CarteiraError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for CarteiraError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for Carteira operations.
pub type Result<T> = std::result::Result<T, CarteiraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CarteiraError::TickerNotFound("ZZZZINVALID".to_string());
        assert_eq!(err.to_string(), "Ticker not found: ZZZZINVALID");

        let err = CarteiraError::DataFetch("connection reset".to_string());
        assert_eq!(err.to_string(), "Data fetch error: connection reset");
    }

    #[test]
    fn test_is_not_found() {
        assert!(CarteiraError::TickerNotFound("AAPL".to_string()).is_not_found());
        assert!(!CarteiraError::Other("boom".to_string()).is_not_found());
    }

    #[test]
    fn test_error_from_string() {
        let err: CarteiraError = "fail".into();
        assert!(matches!(err, CarteiraError::Other(_)));
    }
}
