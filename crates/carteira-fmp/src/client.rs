//! FMP API client implementation.

use async_trait::async_trait;
use carteira_traits::{CarteiraError, DateRange, HistoricalRecord, PriceSource};
use reqwest::Client;
use std::env;

use crate::{FmpError, Result, types::HistoricalPriceFull};

/// Base URL for the FMP v3 API.
const FMP_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

/// Financial Modeling Prep API client.
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: Client,
    api_key: String,
}

impl FmpClient {
    /// Create a new FMP client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create a new FMP client from the `FMP_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_key = env::var("FMP_API_KEY").map_err(|_| FmpError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Build a URL with the API key.
    fn url(&self, endpoint: &str) -> String {
        if endpoint.contains('?') {
            format!("{FMP_BASE_URL}/{endpoint}&apikey={}", self.api_key)
        } else {
            format!("{FMP_BASE_URL}/{endpoint}?apikey={}", self.api_key)
        }
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        log::debug!("GET {endpoint}");
        let url = self.url(endpoint);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FmpError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(FmpError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;

        // Check for error responses
        if text.contains("\"Error Message\"") || text.contains("\"error\"") {
            return Err(FmpError::Api(text));
        }

        serde_json::from_str(&text).map_err(|e| {
            FmpError::Json(serde_json::Error::io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Failed to parse: {e}. Response: {text}"),
            )))
        })
    }

    /// Get historical daily closing prices for a symbol, bounded by `range`.
    ///
    /// Rows come back newest first, exactly as the API returns them.
    ///
    /// # Errors
    ///
    /// [`FmpError::TickerNotFound`] when the response carries no historical
    /// series; other variants for transport and decoding failures.
    pub async fn historical_price_full(
        &self,
        symbol: &str,
        range: &DateRange,
    ) -> Result<HistoricalRecord> {
        let endpoint = format!(
            "historical-price-full/{}?from={}&to={}&serietype=line",
            symbol.to_uppercase(),
            range.from.format("%Y-%m-%d"),
            range.to.format("%Y-%m-%d"),
        );
        let payload: HistoricalPriceFull = self.get(&endpoint).await?;
        payload.into_record(symbol)
    }
}

#[async_trait]
impl PriceSource for FmpClient {
    async fn historical(
        &self,
        symbol: &str,
        range: &DateRange,
    ) -> std::result::Result<HistoricalRecord, CarteiraError> {
        self.historical_price_full(symbol, range)
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = FmpClient::new("test_key");
        assert_eq!(
            client.url("historical-price-full/AAPL?from=2024-02-01&to=2024-02-29&serietype=line"),
            "https://financialmodelingprep.com/api/v3/historical-price-full/AAPL?from=2024-02-01&to=2024-02-29&serietype=line&apikey=test_key"
        );
        assert_eq!(
            client.url("historical-price-full/AAPL"),
            "https://financialmodelingprep.com/api/v3/historical-price-full/AAPL?apikey=test_key"
        );
    }
}
