//! Service facade exposing the core operations to the routing layer.
//!
//! The facade owns the provider plus the normalizers and aggregator built on
//! it, and performs caller-input validation before anything touches the
//! network.

use std::sync::Arc;

use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{Candle, HistoryInterval, MarketSnapshot, Quote, SymbolMatch};
use crate::normalizer::{normalize_search, normalize_series, QuoteNormalizer, SeriesPayload};
use crate::overview::{OverviewConfig, SnapshotAggregator};
use crate::provider::MarketDataProvider;

/// Longest symbol accepted from callers.
const MAX_SYMBOL_LEN: usize = 20;

/// Entry point for quote, history, snapshot and search resolution.
pub struct MarketDataService {
    provider: Arc<dyn MarketDataProvider>,
    normalizer: QuoteNormalizer,
    aggregator: SnapshotAggregator,
}

impl MarketDataService {
    /// Service over the default snapshot universe.
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self::with_config(provider, OverviewConfig::default())
    }

    /// Service with a custom snapshot configuration.
    pub fn with_config(provider: Arc<dyn MarketDataProvider>, config: OverviewConfig) -> Self {
        let normalizer = QuoteNormalizer::new(Arc::clone(&provider));
        let aggregator = SnapshotAggregator::with_config(Arc::clone(&provider), config);

        Self {
            provider,
            normalizer,
            aggregator,
        }
    }

    /// Resolve a normalized quote for one symbol.
    pub async fn resolve_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let symbol = validate_symbol(symbol)?;
        debug!("Resolving quote for {}", symbol);

        let chart = self.provider.fetch_quote(&symbol).await?;
        self.normalizer.normalize(&symbol, &chart).await
    }

    /// Resolve an ordered candle series for one symbol.
    pub async fn resolve_history(
        &self,
        symbol: &str,
        interval: HistoryInterval,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let symbol = validate_symbol(symbol)?;
        debug!("Resolving {} history for {}", interval, symbol);

        let chart = self
            .provider
            .fetch_series(&symbol, interval.granularity(), interval.range())
            .await?;

        normalize_series(SeriesPayload::Chart(chart))
    }

    /// Build the ranked gainers/losers snapshot.
    ///
    /// Never fails: aggregation over zero successful fetches yields an empty
    /// snapshot.
    pub async fn resolve_market_snapshot(&self) -> MarketSnapshot {
        self.aggregator.snapshot().await
    }

    /// Resolve search matches for a free-text query.
    ///
    /// A blank query returns an empty list without an upstream call.
    pub async fn resolve_search(&self, query: &str) -> Result<Vec<SymbolMatch>, MarketDataError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let raw = self.provider.fetch_search(query).await?;
        Ok(normalize_search(raw))
    }
}

/// Validate and canonicalize a caller-supplied symbol.
fn validate_symbol(raw: &str) -> Result<String, MarketDataError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() || trimmed.len() > MAX_SYMBOL_LEN {
        return Err(MarketDataError::InvalidSymbol(raw.to_string()));
    }

    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '='))
    {
        return Err(MarketDataError::InvalidSymbol(raw.to_string()));
    }

    Ok(trimmed.to_ascii_uppercase())
}
