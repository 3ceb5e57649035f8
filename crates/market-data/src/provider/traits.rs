//! Upstream provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;

use super::models::{BatchQuoteItem, ChartResult, SearchResponse};

/// Trait for the upstream financial-data source.
///
/// Implementations issue single-attempt HTTP calls and return provider-shaped
/// payloads; mapping into canonical types happens in the normalizers. No
/// retries live here - transient-failure policy belongs to the caller.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch the combined chart/quote-meta payload for one symbol.
    ///
    /// The range is wide enough for the embedded series to carry the prior
    /// session's close. Fails with [`MarketDataError::SymbolNotFound`] when
    /// the provider reports no chart result or no meta for the symbol.
    async fn fetch_quote(&self, symbol: &str) -> Result<ChartResult, MarketDataError>;

    /// Fetch a time series at the given provider granularity over the given
    /// provider range (e.g. `"1wk"` bars over `"3mo"`).
    ///
    /// Same failure modes as [`fetch_quote`](Self::fetch_quote).
    async fn fetch_series(
        &self,
        symbol: &str,
        granularity: &str,
        range: &str,
    ) -> Result<ChartResult, MarketDataError>;

    /// Search for symbols matching a free-text query.
    async fn fetch_search(&self, query: &str) -> Result<SearchResponse, MarketDataError>;

    /// Quote lookup against the secondary batch endpoint.
    ///
    /// Used only as the third previous-close fallback tier.
    async fn fetch_batch_quotes(
        &self,
        symbols: &[&str],
    ) -> Result<Vec<BatchQuoteItem>, MarketDataError>;
}
