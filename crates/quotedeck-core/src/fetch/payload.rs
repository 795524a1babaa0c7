//! Wire-format structs for the consumed subset of the provider schema.
//!
//! The provider wraps numeric fields as `{"raw": 123.4, "fmt": "123.40"}`
//! objects and reports the close series as nullable arrays aligned with a
//! unix-seconds timestamp array. Everything here is deserialization plus
//! extraction into plain domain values; no I/O.

use serde::Deserialize;

use crate::domain::{PricePoint, UtcDateTime};
use crate::ValidationError;

/// Wrapped numeric value. Only `raw` is consumed.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct RawValue {
    #[serde(default)]
    pub raw: Option<f64>,
}

impl RawValue {
    /// Extract the number, treating non-finite values as absent.
    ///
    /// Zero survives extraction: whether a zero means "unavailable" is a
    /// display decision, not a wire one.
    pub fn to_option(self) -> Option<f64> {
        self.raw.filter(|value| value.is_finite())
    }
}

/// In-band error object carried inside provider envelopes.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProviderError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ProviderError {
    pub fn describe(&self) -> String {
        match (&self.code, &self.description) {
            (Some(code), Some(description)) => format!("{code}: {description}"),
            (Some(code), None) => code.clone(),
            (None, Some(description)) => description.clone(),
            (None, None) => String::from("provider reported an unspecified error"),
        }
    }
}

// --- quoteSummary -----------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary", default)]
    pub quote_summary: Option<QuoteSummaryEnvelope>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuoteSummaryEnvelope {
    #[serde(default)]
    pub result: Option<Vec<QuoteSummaryResult>>,
    #[serde(default)]
    pub error: Option<ProviderError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuoteSummaryResult {
    #[serde(default)]
    pub price: Option<PriceModule>,
    #[serde(rename = "summaryDetail", default)]
    pub summary_detail: Option<SummaryDetailModule>,
    #[serde(rename = "financialData", default)]
    pub financial_data: Option<FinancialDataModule>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PriceModule {
    #[serde(rename = "regularMarketPrice", default)]
    pub regular_market_price: Option<RawValue>,
    #[serde(rename = "regularMarketVolume", default)]
    pub regular_market_volume: Option<RawValue>,
    #[serde(rename = "marketCap", default)]
    pub market_cap: Option<RawValue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryDetailModule {
    #[serde(rename = "trailingPE", default)]
    pub trailing_pe: Option<RawValue>,
    #[serde(default)]
    pub volume: Option<RawValue>,
    #[serde(rename = "marketCap", default)]
    pub market_cap: Option<RawValue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FinancialDataModule {
    #[serde(rename = "currentPrice", default)]
    pub current_price: Option<RawValue>,
}

/// Snapshot fields pulled out of one quoteSummary result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SnapshotFields {
    pub current_price: Option<f64>,
    pub market_cap: Option<u64>,
    pub pe_ratio: Option<f64>,
    pub volume: Option<u64>,
}

/// Resolve each snapshot field across the modules that may carry it.
///
/// Preference order matches the upstream convention: live trade price over
/// regular-market price, the price module's market cap over the summary
/// one. Anything absent stays `None`.
pub(crate) fn extract_snapshot(result: &QuoteSummaryResult) -> SnapshotFields {
    let price = result.price.as_ref();
    let detail = result.summary_detail.as_ref();
    let financial = result.financial_data.as_ref();

    let current_price = financial
        .and_then(|module| module.current_price)
        .and_then(RawValue::to_option)
        .or_else(|| {
            price
                .and_then(|module| module.regular_market_price)
                .and_then(RawValue::to_option)
        });

    let market_cap = price
        .and_then(|module| module.market_cap)
        .and_then(RawValue::to_option)
        .or_else(|| {
            detail
                .and_then(|module| module.market_cap)
                .and_then(RawValue::to_option)
        })
        .and_then(to_count);

    let pe_ratio = detail
        .and_then(|module| module.trailing_pe)
        .and_then(RawValue::to_option);

    let volume = detail
        .and_then(|module| module.volume)
        .and_then(RawValue::to_option)
        .or_else(|| {
            price
                .and_then(|module| module.regular_market_volume)
                .and_then(RawValue::to_option)
        })
        .and_then(to_count);

    SnapshotFields {
        current_price,
        market_cap,
        pe_ratio,
        volume,
    }
}

/// Integer counts (shares, cap dollars) arrive as floats; negatives are
/// provider garbage and treated as absent.
fn to_count(value: f64) -> Option<u64> {
    if value < 0.0 {
        return None;
    }
    Some(value as u64)
}

// --- chart ------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct ChartResponse {
    #[serde(default)]
    pub chart: Option<ChartEnvelope>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartEnvelope {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ProviderError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartResult {
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    #[serde(default)]
    pub indicators: Option<ChartIndicators>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartQuote {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

/// Pair close values with their timestamps, skipping entries the provider
/// nulled out (days with no trade) and values that fail validation.
pub(crate) fn extract_history(result: &ChartResult) -> Result<Vec<PricePoint>, ValidationError> {
    let Some(timestamps) = result.timestamp.as_ref() else {
        return Ok(Vec::new());
    };
    let closes = result
        .indicators
        .as_ref()
        .and_then(|indicators| indicators.quote.first())
        .map(|quote| quote.close.as_slice())
        .unwrap_or(&[]);

    let mut points = Vec::with_capacity(timestamps.len());
    for (index, &unix) in timestamps.iter().enumerate() {
        let Some(close) = closes.get(index).copied().flatten() else {
            continue;
        };
        let ts = UtcDateTime::from_unix_seconds(unix)?;
        if let Ok(point) = PricePoint::new(ts, close) {
            points.push(point);
        }
    }
    Ok(points)
}
