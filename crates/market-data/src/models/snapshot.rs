use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One entry in the market overview ranking.
///
/// Produced only by the snapshot aggregator's simplified resolution path,
/// which trades fallback depth for fan-out throughput.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedQuote {
    /// Ticker symbol
    pub ticker: String,

    /// Current price
    pub price: Decimal,

    /// Absolute price change against the previous close, 2 decimals
    pub change_amount: Decimal,

    /// Percentage change against the previous close, 2 decimals
    pub change_percent: Decimal,

    /// Trading volume
    pub volume: u64,
}

/// Ranked gainers/losers view computed over a fixed symbol universe.
///
/// Gainers are ordered by `change_percent` descending, losers ascending
/// (most negative first); both lists are capped at five entries, carry no
/// zero-change entries, and are disjoint.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub gainers: Vec<RankedQuote>,
    pub losers: Vec<RankedQuote>,
}

impl MarketSnapshot {
    /// True when no symbol produced a ranked entry.
    pub fn is_empty(&self) -> bool {
        self.gainers.is_empty() && self.losers.is_empty()
    }
}
