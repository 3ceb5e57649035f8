//! Market snapshot aggregation.
//!
//! Fans out one quote fetch per configured symbol, tolerates per-symbol
//! failure, and ranks the outcomes into top gainers and losers. This is the
//! only concurrent path in the crate: independent tasks, a join-all barrier,
//! no shared mutable state.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use tokio::sync::Semaphore;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::{MarketSnapshot, RankedQuote};
use crate::normalizer::previous_close::{PreviousCloseChain, ReportedClose};
use crate::normalizer::quote::round2;
use crate::provider::MarketDataProvider;

/// Maximum entries per gainers/losers list.
const TOP_LIST_LEN: usize = 5;

/// Configuration for the snapshot aggregator.
///
/// The symbol universe is injected so deployments can swap it without
/// touching aggregation logic.
#[derive(Clone, Debug)]
pub struct OverviewConfig {
    /// Symbols to aggregate over.
    pub symbols: Vec<String>,

    /// Upper bound on concurrent provider calls.
    pub max_concurrency: usize,

    /// Per-symbol fetch timeout; an expired fetch cancels only its own task.
    pub fetch_timeout: Duration,
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            symbols: ["AAPL", "MSFT", "GOOGL", "AMZN", "NVDA", "META", "TSLA", "NFLX"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_concurrency: 4,
            fetch_timeout: Duration::from_secs(10),
        }
    }
}

/// Fans out one quote fetch per configured symbol and ranks the outcomes.
pub struct SnapshotAggregator {
    provider: Arc<dyn MarketDataProvider>,
    config: OverviewConfig,
}

impl SnapshotAggregator {
    /// Aggregator over the default universe.
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self::with_config(provider, OverviewConfig::default())
    }

    /// Aggregator with a custom configuration.
    pub fn with_config(provider: Arc<dyn MarketDataProvider>, config: OverviewConfig) -> Self {
        Self { provider, config }
    }

    /// Build a snapshot over the configured universe.
    ///
    /// Every failure is confined to its own symbol and converted to "absent
    /// from result". A snapshot over zero successful fetches is empty, not an
    /// error. The join point waits for every dispatched fetch to settle
    /// before ranking.
    pub async fn snapshot(&self) -> MarketSnapshot {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrency.max(1)));

        let fetches = self.config.symbols.iter().map(|symbol| {
            let provider = Arc::clone(&self.provider);
            let semaphore = Arc::clone(&semaphore);
            let symbol = symbol.clone();
            let fetch_timeout = self.config.fetch_timeout;

            async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => return None,
                };

                match timeout(fetch_timeout, fetch_ranked(provider, &symbol)).await {
                    Ok(Ok(ranked)) => ranked,
                    Ok(Err(e)) => {
                        warn!("Excluding {} from snapshot: {}", symbol, e);
                        None
                    }
                    Err(_) => {
                        warn!("Excluding {} from snapshot: fetch timed out", symbol);
                        None
                    }
                }
            }
        });

        let ranked: Vec<RankedQuote> = join_all(fetches).await.into_iter().flatten().collect();

        debug!(
            "Snapshot aggregated {} of {} symbols",
            ranked.len(),
            self.config.symbols.len()
        );

        build_snapshot(ranked)
    }
}

/// Fetch one symbol and run the reported-close-only resolution path.
///
/// The deeper fallback tiers are skipped on purpose: this path serves a
/// many-symbol summary, and an extra network round-trip per symbol is not
/// worth the tail latency there.
async fn fetch_ranked(
    provider: Arc<dyn MarketDataProvider>,
    symbol: &str,
) -> Result<Option<RankedQuote>, MarketDataError> {
    let chart = provider.fetch_quote(symbol).await?;

    let meta = match chart.meta.as_ref() {
        Some(meta) => meta,
        None => return Ok(None),
    };
    let price = match meta.regular_market_price.and_then(Decimal::from_f64) {
        Some(price) => price,
        None => return Ok(None),
    };
    let ticker = meta.symbol.clone().unwrap_or_else(|| symbol.to_string());

    let tier_one = PreviousCloseChain::with_tiers(vec![Box::new(ReportedClose)]);
    let (change_amount, change_percent) = match tier_one.resolve(&ticker, &chart).await {
        Some((previous, _)) => {
            let change = price - previous;
            (round2(change), round2(change / previous * Decimal::ONE_HUNDRED))
        }
        None => (Decimal::ZERO, Decimal::ZERO),
    };

    Ok(Some(RankedQuote {
        ticker,
        price,
        change_amount,
        change_percent,
        volume: meta.regular_market_volume.unwrap_or(0),
    }))
}

/// Rank and partition collected quotes into the snapshot.
fn build_snapshot(mut ranked: Vec<RankedQuote>) -> MarketSnapshot {
    // Stable sort: ties keep original fetch order.
    ranked.sort_by(|a, b| b.change_percent.cmp(&a.change_percent));

    let gainers = ranked
        .iter()
        .filter(|q| q.change_percent > Decimal::ZERO)
        .take(TOP_LIST_LEN)
        .cloned()
        .collect();

    let losers = ranked
        .iter()
        .rev()
        .filter(|q| q.change_percent < Decimal::ZERO)
        .take(TOP_LIST_LEN)
        .cloned()
        .collect();

    MarketSnapshot { gainers, losers }
}
