//! Historical series normalization into ordered [`Candle`] sequences.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

use crate::errors::MarketDataError;
use crate::models::Candle;
use crate::provider::models::ChartResult;

/// One date-keyed OHLCV record, for providers that key series rows by
/// calendar day instead of parallel arrays.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DatedBar {
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<u64>,
}

/// Raw series payload in either provider shape.
pub enum SeriesPayload {
    /// Parallel timestamp/OHLCV arrays.
    Chart(ChartResult),
    /// OHLCV records keyed by `YYYY-MM-DD` day.
    Dated(HashMap<String, DatedBar>),
}

/// Normalize a raw series payload into candles ordered oldest first.
///
/// Rows whose close is missing or not positive are dropped; missing
/// open/high/low/volume on retained rows default to zero. Fails with
/// [`MarketDataError::NoTimeAxis`] when the payload carries no time axis.
pub fn normalize_series(payload: SeriesPayload) -> Result<Vec<Candle>, MarketDataError> {
    match payload {
        SeriesPayload::Chart(chart) => normalize_chart_series(chart),
        SeriesPayload::Dated(map) => normalize_dated_series(map),
    }
}

fn normalize_chart_series(chart: ChartResult) -> Result<Vec<Candle>, MarketDataError> {
    let timestamps = chart
        .timestamp
        .as_ref()
        .filter(|t| !t.is_empty())
        .ok_or(MarketDataError::NoTimeAxis)?;

    let block = chart.indicators.as_ref().and_then(|i| i.quote.first());

    let mut candles: Vec<Candle> = timestamps
        .iter()
        .enumerate()
        .filter_map(|(index, &ts)| {
            let date = DateTime::from_timestamp(ts, 0)?.date_naive();

            let close = value_at(block.map(|b| b.close.as_slice()), index)
                .filter(|c| *c > 0.0)
                .and_then(Decimal::from_f64)?;

            Some(Candle {
                date,
                open: field_or_zero(block.map(|b| b.open.as_slice()), index),
                high: field_or_zero(block.map(|b| b.high.as_slice()), index),
                low: field_or_zero(block.map(|b| b.low.as_slice()), index),
                close,
                volume: block
                    .and_then(|b| b.volume.get(index).copied().flatten())
                    .unwrap_or(0),
            })
        })
        .collect();

    candles.sort_by_key(|c| c.date);
    Ok(candles)
}

fn normalize_dated_series(map: HashMap<String, DatedBar>) -> Result<Vec<Candle>, MarketDataError> {
    if map.is_empty() {
        return Err(MarketDataError::NoTimeAxis);
    }

    let mut candles: Vec<Candle> = map
        .into_iter()
        .filter_map(|(day, bar)| {
            let date = match NaiveDate::parse_from_str(&day, "%Y-%m-%d") {
                Ok(date) => date,
                Err(_) => {
                    warn!("Skipping series row with unparseable date key '{}'", day);
                    return None;
                }
            };

            let close = bar
                .close
                .filter(|c| *c > 0.0)
                .and_then(Decimal::from_f64)?;

            Some(Candle {
                date,
                open: bar.open.and_then(Decimal::from_f64).unwrap_or(Decimal::ZERO),
                high: bar.high.and_then(Decimal::from_f64).unwrap_or(Decimal::ZERO),
                low: bar.low.and_then(Decimal::from_f64).unwrap_or(Decimal::ZERO),
                close,
                volume: bar.volume.unwrap_or(0),
            })
        })
        .collect();

    candles.sort_by_key(|c| c.date);
    Ok(candles)
}

fn value_at(values: Option<&[Option<f64>]>, index: usize) -> Option<f64> {
    values.and_then(|v| v.get(index).copied().flatten())
}

fn field_or_zero(values: Option<&[Option<f64>]>, index: usize) -> Decimal {
    value_at(values, index)
        .and_then(Decimal::from_f64)
        .unwrap_or(Decimal::ZERO)
}
