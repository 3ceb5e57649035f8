//! Normalization of provider-shaped payloads into the canonical model.
//!
//! - `quote` - single-symbol quote normalization with fallback recovery
//! - `previous_close` - the ordered previous-close fallback chain
//! - `series` - historical OHLCV normalization
//! - `search` - search match mapping

pub mod previous_close;
pub mod quote;
pub mod search;
pub mod series;

pub use previous_close::{
    BatchQuoteClose, IntradaySeriesClose, OpenPriceClose, PreviousCloseChain,
    PreviousCloseResolver, ReportedClose,
};
pub use quote::QuoteNormalizer;
pub use search::normalize_search;
pub use series::{normalize_series, DatedBar, SeriesPayload};
