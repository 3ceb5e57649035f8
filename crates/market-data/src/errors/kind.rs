//! Error classification for the caller boundary.

/// Coarse classification of a [`MarketDataError`](super::MarketDataError).
///
/// The routing layer consuming this crate maps each kind onto a transport
/// outcome (not-found, bad-gateway, bad-request) without matching on
/// individual variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The provider has no data for the requested identifier.
    NotFound,

    /// Transport failure, rate limiting, or a malformed provider payload.
    Upstream,

    /// Malformed caller input.
    Validation,
}
