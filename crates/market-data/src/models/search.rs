use serde::{Deserialize, Serialize};

/// Canonical match from a symbol search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymbolMatch {
    /// Symbol/ticker (e.g., "AAPL", "SHOP.TO")
    pub symbol: String,

    /// Display name (e.g., "Apple Inc.")
    pub name: String,

    /// Instrument type (e.g., "EQUITY", "ETF")
    pub instrument_type: String,

    /// Market the symbol trades on (e.g., "us_market")
    pub market: String,

    /// Currency for the symbol (e.g., "USD")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}
