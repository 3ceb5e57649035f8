//! Ordered fallback chain for resolving a quote's previous close.
//!
//! Each tier is a strategy yielding an optional value; the chain applies the
//! first value greater than zero. A tier that errors is treated as a failed
//! tier and the chain falls through, so one tier's transport failure (the
//! batch-quote tier issues its own network call) never aborts resolution.

use std::sync::Arc;

use async_trait::async_trait;
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::PreviousCloseSource;
use crate::provider::models::ChartResult;
use crate::provider::MarketDataProvider;

/// One strategy for recovering a previous close from a quote payload.
///
/// Returning `Ok(None)` means the tier cannot produce a value and the next
/// tier should be tried.
#[async_trait]
pub trait PreviousCloseResolver: Send + Sync {
    /// Tag recorded on the quote when this tier wins.
    fn source(&self) -> PreviousCloseSource;

    async fn resolve(
        &self,
        symbol: &str,
        chart: &ChartResult,
    ) -> Result<Option<Decimal>, MarketDataError>;
}

/// Tier 1: the provider's directly reported previous-close field.
pub struct ReportedClose;

#[async_trait]
impl PreviousCloseResolver for ReportedClose {
    fn source(&self) -> PreviousCloseSource {
        PreviousCloseSource::Reported
    }

    async fn resolve(
        &self,
        _symbol: &str,
        chart: &ChartResult,
    ) -> Result<Option<Decimal>, MarketDataError> {
        Ok(chart
            .meta
            .as_ref()
            .and_then(|m| m.previous_close)
            .and_then(Decimal::from_f64))
    }
}

/// Tier 2: second-to-last close of the embedded intraday series.
pub struct IntradaySeriesClose;

#[async_trait]
impl PreviousCloseResolver for IntradaySeriesClose {
    fn source(&self) -> PreviousCloseSource {
        PreviousCloseSource::IntradaySeries
    }

    async fn resolve(
        &self,
        _symbol: &str,
        chart: &ChartResult,
    ) -> Result<Option<Decimal>, MarketDataError> {
        let closes = match chart.indicators.as_ref().and_then(|i| i.quote.first()) {
            Some(block) => &block.close,
            None => return Ok(None),
        };

        if closes.len() < 2 {
            return Ok(None);
        }

        // The series ends with the currently-forming bar; the bar before it
        // is the prior session. Both must be present for the pair to be
        // trusted.
        match (closes[closes.len() - 1], closes[closes.len() - 2]) {
            (Some(_), Some(previous)) => Ok(Decimal::from_f64(previous)),
            _ => Ok(None),
        }
    }
}

/// Tier 3: secondary batch-quote lookup.
///
/// The only tier with its own network side effect; its failures fall through
/// to the next tier at the chain level.
pub struct BatchQuoteClose {
    provider: Arc<dyn MarketDataProvider>,
}

impl BatchQuoteClose {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl PreviousCloseResolver for BatchQuoteClose {
    fn source(&self) -> PreviousCloseSource {
        PreviousCloseSource::BatchQuote
    }

    async fn resolve(
        &self,
        symbol: &str,
        _chart: &ChartResult,
    ) -> Result<Option<Decimal>, MarketDataError> {
        let items = self.provider.fetch_batch_quotes(&[symbol]).await?;

        Ok(items
            .first()
            .and_then(|item| item.regular_market_previous_close)
            .and_then(Decimal::from_f64))
    }
}

/// Tier 4: the day's open price, standing in for a true previous close.
pub struct OpenPriceClose;

#[async_trait]
impl PreviousCloseResolver for OpenPriceClose {
    fn source(&self) -> PreviousCloseSource {
        PreviousCloseSource::OpenApproximation
    }

    async fn resolve(
        &self,
        _symbol: &str,
        chart: &ChartResult,
    ) -> Result<Option<Decimal>, MarketDataError> {
        Ok(chart
            .meta
            .as_ref()
            .and_then(|m| m.regular_market_open)
            .and_then(Decimal::from_f64))
    }
}

/// Ordered previous-close fallback chain.
///
/// Tiers execute strictly in order, each only after every prior tier failed
/// to produce a value greater than zero.
pub struct PreviousCloseChain {
    tiers: Vec<Box<dyn PreviousCloseResolver>>,
}

impl PreviousCloseChain {
    /// Chain with the full default tier order.
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self::with_tiers(vec![
            Box::new(ReportedClose),
            Box::new(IntradaySeriesClose),
            Box::new(BatchQuoteClose::new(provider)),
            Box::new(OpenPriceClose),
        ])
    }

    /// Chain with a custom tier order.
    pub fn with_tiers(tiers: Vec<Box<dyn PreviousCloseResolver>>) -> Self {
        Self { tiers }
    }

    /// Apply tiers in order; the first value greater than zero wins.
    pub async fn resolve(
        &self,
        symbol: &str,
        chart: &ChartResult,
    ) -> Option<(Decimal, PreviousCloseSource)> {
        for tier in &self.tiers {
            match tier.resolve(symbol, chart).await {
                Ok(Some(value)) if value > Decimal::ZERO => {
                    debug!(
                        "Resolved previous close for {} via {:?}: {}",
                        symbol,
                        tier.source(),
                        value
                    );
                    return Some((value, tier.source()));
                }
                Ok(_) => continue,
                Err(e) => {
                    warn!(
                        "Previous close tier {:?} failed for {}: {}",
                        tier.source(),
                        symbol,
                        e
                    );
                    continue;
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::models::{
        BatchQuoteItem, ChartIndicators, ChartMeta, ChartQuoteBlock, SearchResponse,
    };
    use rust_decimal_macros::dec;

    fn chart(meta: ChartMeta) -> ChartResult {
        ChartResult {
            meta: Some(meta),
            ..Default::default()
        }
    }

    fn chart_with_closes(meta: ChartMeta, closes: Vec<Option<f64>>) -> ChartResult {
        ChartResult {
            meta: Some(meta),
            timestamp: Some((0..closes.len() as i64).map(|i| 1_752_451_200 + i * 86_400).collect()),
            indicators: Some(ChartIndicators {
                quote: vec![ChartQuoteBlock {
                    close: closes,
                    ..Default::default()
                }],
            }),
        }
    }

    struct MockProvider {
        batch_previous_close: Option<f64>,
        should_fail: bool,
    }

    #[async_trait]
    impl MarketDataProvider for MockProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn fetch_quote(&self, _symbol: &str) -> Result<ChartResult, MarketDataError> {
            unimplemented!("not used by the chain")
        }

        async fn fetch_series(
            &self,
            _symbol: &str,
            _granularity: &str,
            _range: &str,
        ) -> Result<ChartResult, MarketDataError> {
            unimplemented!("not used by the chain")
        }

        async fn fetch_search(&self, _query: &str) -> Result<SearchResponse, MarketDataError> {
            unimplemented!("not used by the chain")
        }

        async fn fetch_batch_quotes(
            &self,
            symbols: &[&str],
        ) -> Result<Vec<BatchQuoteItem>, MarketDataError> {
            if self.should_fail {
                return Err(MarketDataError::ProviderError {
                    provider: "MOCK".to_string(),
                    message: "Mock failure".to_string(),
                });
            }

            Ok(vec![BatchQuoteItem {
                symbol: Some(symbols[0].to_string()),
                regular_market_price: None,
                regular_market_previous_close: self.batch_previous_close,
            }])
        }
    }

    #[tokio::test]
    async fn test_reported_close_reads_meta() {
        let chart = chart(ChartMeta {
            previous_close: Some(209.55),
            ..Default::default()
        });

        let value = ReportedClose.resolve("AAPL", &chart).await.unwrap();
        assert_eq!(value, Some(dec!(209.55)));
    }

    #[test]
    fn test_tier_sources() {
        assert_eq!(ReportedClose.source(), PreviousCloseSource::Reported);
        assert_eq!(
            IntradaySeriesClose.source(),
            PreviousCloseSource::IntradaySeries
        );
        assert_eq!(OpenPriceClose.source(), PreviousCloseSource::OpenApproximation);
    }

    #[tokio::test]
    async fn test_intraday_series_uses_second_to_last_close() {
        let chart = chart_with_closes(
            ChartMeta::default(),
            vec![Some(98.5), Some(99.2), Some(100.0)],
        );

        let value = IntradaySeriesClose.resolve("AAPL", &chart).await.unwrap();
        assert_eq!(value, Some(dec!(99.2)));
    }

    #[tokio::test]
    async fn test_intraday_series_requires_two_points() {
        let chart = chart_with_closes(ChartMeta::default(), vec![Some(99.2)]);

        let value = IntradaySeriesClose.resolve("AAPL", &chart).await.unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn test_intraday_series_rejects_null_endpoints() {
        let missing_current = chart_with_closes(
            ChartMeta::default(),
            vec![Some(98.5), Some(99.2), None],
        );
        let missing_previous =
            chart_with_closes(ChartMeta::default(), vec![Some(98.5), None, Some(100.0)]);

        assert_eq!(
            IntradaySeriesClose
                .resolve("AAPL", &missing_current)
                .await
                .unwrap(),
            None
        );
        assert_eq!(
            IntradaySeriesClose
                .resolve("AAPL", &missing_previous)
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_open_price_reads_meta() {
        let chart = chart(ChartMeta {
            regular_market_open: Some(208.0),
            ..Default::default()
        });

        let value = OpenPriceClose.resolve("AAPL", &chart).await.unwrap();
        assert_eq!(value, Some(dec!(208)));
    }

    #[tokio::test]
    async fn test_batch_quote_reads_secondary_lookup() {
        let provider = Arc::new(MockProvider {
            batch_previous_close: Some(209.55),
            should_fail: false,
        });

        let tier = BatchQuoteClose::new(provider);
        let value = tier.resolve("AAPL", &ChartResult::default()).await.unwrap();
        assert_eq!(value, Some(dec!(209.55)));
    }

    #[tokio::test]
    async fn test_chain_skips_non_positive_values() {
        // Reported close of zero must not win; the series tier should.
        let chart = chart_with_closes(
            ChartMeta {
                previous_close: Some(0.0),
                ..Default::default()
            },
            vec![Some(98.5), Some(99.2), Some(100.0)],
        );

        let chain =
            PreviousCloseChain::with_tiers(vec![Box::new(ReportedClose), Box::new(IntradaySeriesClose)]);

        let (value, source) = chain.resolve("AAPL", &chart).await.unwrap();
        assert_eq!(value, dec!(99.2));
        assert_eq!(source, PreviousCloseSource::IntradaySeries);
    }

    #[tokio::test]
    async fn test_chain_tier_error_falls_through() {
        let provider = Arc::new(MockProvider {
            batch_previous_close: None,
            should_fail: true,
        });

        let chart = chart(ChartMeta {
            regular_market_open: Some(208.0),
            ..Default::default()
        });

        let chain = PreviousCloseChain::with_tiers(vec![
            Box::new(BatchQuoteClose::new(provider)),
            Box::new(OpenPriceClose),
        ]);

        let (value, source) = chain.resolve("AAPL", &chart).await.unwrap();
        assert_eq!(value, dec!(208));
        assert_eq!(source, PreviousCloseSource::OpenApproximation);
    }

    #[tokio::test]
    async fn test_chain_is_reorderable() {
        let chart = chart(ChartMeta {
            previous_close: Some(209.55),
            regular_market_open: Some(208.0),
            ..Default::default()
        });

        let chain =
            PreviousCloseChain::with_tiers(vec![Box::new(OpenPriceClose), Box::new(ReportedClose)]);

        let (value, source) = chain.resolve("AAPL", &chart).await.unwrap();
        assert_eq!(value, dec!(208));
        assert_eq!(source, PreviousCloseSource::OpenApproximation);
    }

    #[tokio::test]
    async fn test_chain_exhaustion_yields_none() {
        let chain =
            PreviousCloseChain::with_tiers(vec![Box::new(ReportedClose), Box::new(OpenPriceClose)]);

        let resolved = chain.resolve("AAPL", &ChartResult::default()).await;
        assert!(resolved.is_none());
    }
}
