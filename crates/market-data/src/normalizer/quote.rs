//! Quote normalization: raw chart payload to canonical [`Quote`].

use std::sync::Arc;

use num_traits::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

use crate::errors::MarketDataError;
use crate::models::Quote;
use crate::provider::models::ChartResult;
use crate::provider::MarketDataProvider;

use super::previous_close::PreviousCloseChain;

/// Round to 2 decimals the way display prices round.
pub(crate) fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Maps a raw chart payload into a canonical [`Quote`], recovering a missing
/// previous close through the fallback chain.
pub struct QuoteNormalizer {
    chain: PreviousCloseChain,
}

impl QuoteNormalizer {
    /// Normalizer with the full default fallback chain.
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            chain: PreviousCloseChain::new(provider),
        }
    }

    /// Normalizer with a custom chain.
    pub fn with_chain(chain: PreviousCloseChain) -> Self {
        Self { chain }
    }

    /// Normalize one quote payload.
    ///
    /// Fails with [`MarketDataError::SymbolNotFound`] when the payload lacks
    /// symbol or price identity. An exhausted fallback chain is not an error:
    /// the quote reports zero change with an explicitly null previous close.
    pub async fn normalize(
        &self,
        symbol: &str,
        chart: &ChartResult,
    ) -> Result<Quote, MarketDataError> {
        let meta = chart
            .meta
            .as_ref()
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;

        if meta.symbol.is_none() {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }

        let price = meta
            .regular_market_price
            .and_then(Decimal::from_f64)
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;

        let canonical = meta.symbol.clone().unwrap_or_else(|| symbol.to_string());

        let resolved = self.chain.resolve(&canonical, chart).await;
        if resolved.is_none() {
            warn!("Previous close unresolved for {}; reporting zero change", canonical);
        }

        let (previous_close, previous_close_source, change, change_percent) = match resolved {
            Some((previous, source)) => {
                let change = price - previous;
                let percent = change / previous * Decimal::ONE_HUNDRED;
                (Some(previous), Some(source), round2(change), round2(percent))
            }
            None => (None, None, Decimal::ZERO, Decimal::ZERO),
        };

        Ok(Quote {
            symbol: canonical,
            price,
            previous_close,
            previous_close_source,
            change,
            change_percent,
            volume: meta.regular_market_volume.unwrap_or(0),
            open: meta.regular_market_open.and_then(Decimal::from_f64),
            high: meta.regular_market_day_high.and_then(Decimal::from_f64),
            low: meta.regular_market_day_low.and_then(Decimal::from_f64),
        })
    }
}
