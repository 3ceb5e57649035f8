use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

/// Logical history interval selected by the caller.
///
/// Each interval maps to a fixed provider bar granularity and lookback
/// window:
///
/// | interval | granularity | lookback |
/// |----------|-------------|----------|
/// | daily    | 1-day bars  | 1 month  |
/// | weekly   | 1-week bars | 3 months |
/// | monthly  | 1-month bars| 1 year   |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryInterval {
    Daily,
    Weekly,
    Monthly,
}

impl HistoryInterval {
    /// Provider bar granularity for this interval.
    pub fn granularity(&self) -> &'static str {
        match self {
            Self::Daily => "1d",
            Self::Weekly => "1wk",
            Self::Monthly => "1mo",
        }
    }

    /// Provider lookback window for this interval.
    pub fn range(&self) -> &'static str {
        match self {
            Self::Daily => "1mo",
            Self::Weekly => "3mo",
            Self::Monthly => "1y",
        }
    }

    /// Caller-facing name of this interval.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for HistoryInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryInterval {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(MarketDataError::InvalidInterval(s.to_string())),
        }
    }
}
