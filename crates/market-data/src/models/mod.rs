//! Canonical market data models
//!
//! This module contains the core data types produced by the normalizers:
//! - `quote` - Normalized quote data (Quote, PreviousCloseSource)
//! - `candle` - One OHLCV bar (Candle)
//! - `interval` - Logical history interval and its provider mapping (HistoryInterval)
//! - `snapshot` - Ranked market overview (RankedQuote, MarketSnapshot)
//! - `search` - Canonical search match (SymbolMatch)
//!
//! All of these are ephemeral: constructed fresh per request, never persisted.

mod candle;
mod interval;
mod quote;
mod search;
mod snapshot;

pub use candle::Candle;
pub use interval::HistoryInterval;
pub use quote::{PreviousCloseSource, Quote};
pub use search::SymbolMatch;
pub use snapshot::{MarketSnapshot, RankedQuote};
