use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which fallback tier produced a resolved previous close.
///
/// Recorded on the quote so callers can tell a true previous close from an
/// approximation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviousCloseSource {
    /// Directly reported by the provider.
    Reported,

    /// Second-to-last close of the embedded intraday series.
    IntradaySeries,

    /// Secondary batch-quote lookup.
    BatchQuote,

    /// The day's open price, standing in for a true previous close.
    OpenApproximation,
}

/// Normalized real-time price snapshot for one symbol.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    /// Symbol the quote belongs to
    pub symbol: String,

    /// Current price
    pub price: Decimal,

    /// Resolved previous close. `None` means the fallback chain was
    /// exhausted; it serializes as an explicit `null`, never as a zero.
    pub previous_close: Option<Decimal>,

    /// Which tier resolved the previous close
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_close_source: Option<PreviousCloseSource>,

    /// Absolute price change against the previous close, 2 decimals
    pub change: Decimal,

    /// Percentage change against the previous close, 2 decimals
    pub change_percent: Decimal,

    /// Trading volume
    pub volume: u64,

    /// Opening price (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<Decimal>,

    /// Day high (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Decimal>,

    /// Day low (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<Decimal>,
}
