//! Upstream provider adapter.
//!
//! This module defines the adapter contract and its concrete implementation:
//! - `traits` - the [`MarketDataProvider`] trait
//! - `models` - provider-shaped raw payload types
//! - `yahoo` - Yahoo Finance implementation

pub mod models;
mod traits;
pub mod yahoo;

pub use traits::MarketDataProvider;
pub use yahoo::YahooProvider;
