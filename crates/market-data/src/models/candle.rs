use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One OHLCV bar for one trading period.
///
/// A normalized series only carries candles with a positive close; other
/// fields default to zero when the provider omits them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Calendar day of the bar, unique within a series
    pub date: NaiveDate,

    /// Opening price
    pub open: Decimal,

    /// High price
    pub high: Decimal,

    /// Low price
    pub low: Decimal,

    /// Closing price, always positive
    pub close: Decimal,

    /// Trading volume
    pub volume: u64,
}
