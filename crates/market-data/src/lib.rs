//! Stockpulse Market Data Crate
//!
//! This crate normalizes heterogeneous, partially-populated responses from an
//! external financial-data provider into a consistent quote/history model and
//! aggregates a ranked gainers/losers snapshot over a fixed symbol universe.
//!
//! # Overview
//!
//! The crate provides:
//! - Canonical quote resolution with multi-tier previous-close recovery
//! - Historical OHLCV normalization for daily/weekly/monthly intervals
//! - A partial-failure-tolerant concurrent market snapshot aggregator
//! - Symbol search mapping
//!
//! # Architecture
//!
//! ```text
//! +-------------------+
//! | MarketDataService |  (exposed operations)
//! +-------------------+
//!    |            \
//!    v             v
//! +-------------+  +--------------------+
//! | Normalizers |  | SnapshotAggregator |  (fan-out / fan-in)
//! +-------------+  +--------------------+
//!    |                  |
//!    v                  v
//! +----------------------------+
//! |     MarketDataProvider     |  (raw provider payloads)
//! +----------------------------+
//! ```
//!
//! The provider adapter returns loosely-structured, provider-shaped payloads;
//! the normalizers map those into the canonical model and never let provider
//! field names leak further. All entities are ephemeral and request-scoped.
//!
//! # Core Types
//!
//! - [`Quote`] - normalized price snapshot with resolved previous close
//! - [`Candle`] - one OHLCV bar, part of an ordered series
//! - [`MarketSnapshot`] - ranked gainers/losers view
//! - [`SymbolMatch`] - canonical search hit
//! - [`MarketDataError`] / [`ErrorKind`] - the error taxonomy

pub mod errors;
pub mod models;
pub mod normalizer;
pub mod overview;
pub mod provider;
pub mod service;

// Re-export the error taxonomy
pub use errors::{ErrorKind, MarketDataError};

// Re-export all public types from models
pub use models::{
    Candle, HistoryInterval, MarketSnapshot, PreviousCloseSource, Quote, RankedQuote, SymbolMatch,
};

// Re-export normalizer entry points
pub use normalizer::{
    normalize_search, normalize_series, PreviousCloseChain, PreviousCloseResolver,
    QuoteNormalizer, SeriesPayload,
};

// Re-export aggregator types
pub use overview::{OverviewConfig, SnapshotAggregator};

// Re-export provider types
pub use provider::{MarketDataProvider, YahooProvider};

// Re-export the service facade
pub use service::MarketDataService;
