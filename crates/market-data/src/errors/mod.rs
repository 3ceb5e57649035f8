//! Error types and classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all market data operations
//! - [`ErrorKind`]: Coarse classification consumed at the caller boundary

mod kind;

pub use kind::ErrorKind;

use thiserror::Error;

/// Errors that can occur during market data operations.
///
/// Each variant is classified into an [`ErrorKind`] via the
/// [`kind`](Self::kind) method, which is the contract the routing layer
/// depends on.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// A series payload carried no time axis, so there is nothing to
    /// normalize for the requested range.
    #[error("No time axis in series payload")]
    NoTimeAxis,

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider returned an unusable response: an error body, an
    /// unexpected status, or a payload that failed to parse.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The caller-supplied symbol is malformed.
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// The caller-supplied interval is not one of daily/weekly/monthly.
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    /// A network error occurred while communicating with the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns the classification for this error.
    ///
    /// - [`ErrorKind::NotFound`]: the provider has no data for the identifier
    /// - [`ErrorKind::Upstream`]: transport failure, rate limiting, or a
    ///   malformed provider payload
    /// - [`ErrorKind::Validation`]: malformed caller input
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SymbolNotFound(_) | Self::NoTimeAxis => ErrorKind::NotFound,

            Self::RateLimited { .. }
            | Self::Timeout { .. }
            | Self::ProviderError { .. }
            | Self::Network(_) => ErrorKind::Upstream,

            Self::InvalidSymbol(_) | Self::InvalidInterval(_) => ErrorKind::Validation,
        }
    }
}
