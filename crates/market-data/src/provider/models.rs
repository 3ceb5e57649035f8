//! Raw response models for the upstream provider endpoints.
//!
//! Every field is optional: the provider omits whatever it does not have for
//! a symbol, and the normalizers decide what is required. These types stay
//! behind the normalizer boundary; canonical models never carry provider
//! field names.

use serde::Deserialize;

// ============================================================================
// Chart endpoint (combined quote meta + time series)
// ============================================================================

/// Envelope of the chart endpoint.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartApiError>,
}

/// Error body the chart endpoint returns in place of a result.
#[derive(Debug, Deserialize)]
pub struct ChartApiError {
    pub code: Option<String>,
    pub description: Option<String>,
}

/// One chart result: current-price meta plus optional embedded series arrays.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChartResult {
    pub meta: Option<ChartMeta>,
    pub timestamp: Option<Vec<i64>>,
    pub indicators: Option<ChartIndicators>,
}

/// Current-price meta fields of a chart result.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub symbol: Option<String>,
    pub currency: Option<String>,
    pub regular_market_price: Option<f64>,
    pub previous_close: Option<f64>,
    pub chart_previous_close: Option<f64>,
    pub regular_market_open: Option<f64>,
    pub regular_market_day_high: Option<f64>,
    pub regular_market_day_low: Option<f64>,
    pub regular_market_volume: Option<u64>,
    // Note: exchangeName, instrumentType, regularMarketTime exist but are not used
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<ChartQuoteBlock>,
    // Note: adjclose exists but is not used
}

/// Parallel OHLCV arrays; individual entries are `null` for missing rows.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChartQuoteBlock {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

// ============================================================================
// Batch quote endpoint (secondary source)
// ============================================================================

/// Envelope of the batch quote endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchQuoteResponse {
    pub quote_response: BatchQuoteEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct BatchQuoteEnvelope {
    #[serde(default)]
    pub result: Vec<BatchQuoteItem>,
    // Note: error field exists but failures surface via HTTP status
}

/// One quote from the batch endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchQuoteItem {
    pub symbol: Option<String>,
    pub regular_market_price: Option<f64>,
    pub regular_market_previous_close: Option<f64>,
}

// ============================================================================
// Search endpoint
// ============================================================================

/// Envelope of the symbol-search endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub quotes: Vec<SearchQuote>,
    // Note: news and count exist but news is never requested
}

/// One raw search match.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchQuote {
    pub symbol: Option<String>,
    pub shortname: Option<String>,
    pub longname: Option<String>,
    #[serde(rename = "quoteType")]
    pub quote_type: Option<String>,
    pub market: Option<String>,
    pub currency: Option<String>,
    // Note: exchange and score exist but are not used
}
