//! Yahoo Finance market data provider.
//!
//! Uses the public, unauthenticated endpoints:
//! - `/v8/finance/chart/{symbol}` for quote meta and time series
//! - `/v1/finance/search` for symbol search
//! - `/v7/finance/quote` for the secondary batch quote source

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::debug;
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::provider::models::{
    BatchQuoteItem, BatchQuoteResponse, ChartResponse, ChartResult, SearchResponse,
};
use crate::provider::MarketDataProvider;

const CHART_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const SEARCH_URL: &str = "https://query1.finance.yahoo.com/v1/finance/search";
const BATCH_QUOTE_URL: &str = "https://query1.finance.yahoo.com/v7/finance/quote";
const PROVIDER_ID: &str = "YAHOO";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Granularity and range used for quote fetches. The 5-day range keeps the
/// prior session's close inside the embedded series.
const QUOTE_GRANULARITY: &str = "1d";
const QUOTE_RANGE: &str = "5d";

/// Yahoo Finance market data provider.
///
/// Each call is a single attempt with network side effects only.
pub struct YahooProvider {
    client: Client,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Issue a GET request, mapping transport conditions onto the error
    /// taxonomy.
    async fn send(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<reqwest::Response, MarketDataError> {
        let mut request = self.client.get(url).header(header::USER_AGENT, USER_AGENT);

        for (key, value) in params {
            request = request.query(&[(key, value)]);
        }

        debug!("{} request: {} with {} params", PROVIDER_ID, url, params.len());

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::Network(e)
            }
        })?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        Ok(response)
    }

    async fn fetch_chart(
        &self,
        symbol: &str,
        granularity: &str,
        range: &str,
    ) -> Result<ChartResult, MarketDataError> {
        let url = format!("{}/{}", CHART_BASE_URL, encode(symbol));
        let response = self
            .send(&url, &[("interval", granularity), ("range", range)])
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }
        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Chart request returned status {}", status),
            });
        }

        let data: ChartResponse =
            response
                .json()
                .await
                .map_err(|e| MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("Failed to parse chart response: {}", e),
                })?;

        unwrap_chart(symbol, data)
    }
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the single chart result from a chart envelope.
fn unwrap_chart(symbol: &str, data: ChartResponse) -> Result<ChartResult, MarketDataError> {
    if let Some(error) = data.chart.error {
        let code = error.code.unwrap_or_default();
        if code.eq_ignore_ascii_case("not found") {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }
        return Err(MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: format!("{}: {}", code, error.description.unwrap_or_default()),
        });
    }

    match data.chart.result.unwrap_or_default().into_iter().next() {
        Some(result) if result.meta.is_some() => Ok(result),
        _ => Err(MarketDataError::SymbolNotFound(symbol.to_string())),
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_quote(&self, symbol: &str) -> Result<ChartResult, MarketDataError> {
        self.fetch_chart(symbol, QUOTE_GRANULARITY, QUOTE_RANGE).await
    }

    async fn fetch_series(
        &self,
        symbol: &str,
        granularity: &str,
        range: &str,
    ) -> Result<ChartResult, MarketDataError> {
        self.fetch_chart(symbol, granularity, range).await
    }

    async fn fetch_search(&self, query: &str) -> Result<SearchResponse, MarketDataError> {
        let response = self
            .send(
                SEARCH_URL,
                &[("q", query), ("quotesCount", "10"), ("newsCount", "0")],
            )
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Search request returned status {}", status),
            });
        }

        response
            .json()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse search response: {}", e),
            })
    }

    async fn fetch_batch_quotes(
        &self,
        symbols: &[&str],
    ) -> Result<Vec<BatchQuoteItem>, MarketDataError> {
        let joined = symbols.join(",");
        let response = self.send(BATCH_QUOTE_URL, &[("symbols", &joined)]).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Batch quote request returned status {}", status),
            });
        }

        let data: BatchQuoteResponse =
            response
                .json()
                .await
                .map_err(|e| MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("Failed to parse batch quote response: {}", e),
                })?;

        Ok(data.quote_response.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn chart_json(body: &str) -> ChartResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_unwrap_chart_returns_result_with_meta() {
        let data = chart_json(
            r#"{"chart": {"result": [{"meta": {"symbol": "AAPL", "regularMarketPrice": 211.98}}], "error": null}}"#,
        );

        let result = unwrap_chart("AAPL", data).unwrap();
        assert_eq!(result.meta.unwrap().symbol.as_deref(), Some("AAPL"));
    }

    #[test]
    fn test_unwrap_chart_maps_not_found_error_body() {
        let data = chart_json(
            r#"{"chart": {"result": null, "error": {"code": "Not Found", "description": "No data found"}}}"#,
        );

        let error = unwrap_chart("NOPE", data).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotFound);
        match error {
            MarketDataError::SymbolNotFound(symbol) => assert_eq!(symbol, "NOPE"),
            other => panic!("Expected SymbolNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_unwrap_chart_maps_other_error_body_to_provider_error() {
        let data = chart_json(
            r#"{"chart": {"result": null, "error": {"code": "Internal Server Error", "description": "upstream hiccup"}}}"#,
        );

        let error = unwrap_chart("AAPL", data).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Upstream);
    }

    #[test]
    fn test_unwrap_chart_without_meta_is_not_found() {
        let data = chart_json(r#"{"chart": {"result": [{"timestamp": [1752451200]}], "error": null}}"#);

        let error = unwrap_chart("AAPL", data).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_unwrap_chart_with_empty_result_is_not_found() {
        let data = chart_json(r#"{"chart": {"result": [], "error": null}}"#);

        let error = unwrap_chart("AAPL", data).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }
}
