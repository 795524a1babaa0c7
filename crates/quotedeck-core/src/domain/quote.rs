use std::collections::hash_map;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Symbol, UtcDateTime, ValidationError};

/// One entry of a historical close series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub ts: UtcDateTime,
    pub close: f64,
}

impl PricePoint {
    pub fn new(ts: UtcDateTime, close: f64) -> Result<Self, ValidationError> {
        ensure_non_negative("close", close)?;
        Ok(Self { ts, close })
    }
}

/// Normalized snapshot of one company's current and historical market data.
///
/// Every numeric field is either a finite in-range value or `None`. The
/// provider's habit of signalling "unavailable" with a bare zero is a
/// formatting concern and stops at the display layer, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub symbol: Symbol,
    pub current_price: Option<f64>,
    pub market_cap: Option<u64>,
    /// Trailing P/E. May be negative for unprofitable companies; display
    /// code suppresses non-positive values, the record keeps them.
    pub pe_ratio: Option<f64>,
    pub volume: Option<u64>,
    /// Chronological close series for the requested period. May be empty.
    pub price_history: Vec<PricePoint>,
}

impl QuoteRecord {
    pub fn new(
        symbol: Symbol,
        current_price: Option<f64>,
        market_cap: Option<u64>,
        pe_ratio: Option<f64>,
        volume: Option<u64>,
        price_history: Vec<PricePoint>,
    ) -> Result<Self, ValidationError> {
        if let Some(price) = current_price {
            ensure_non_negative("current_price", price)?;
        }
        if let Some(ratio) = pe_ratio {
            ensure_finite("pe_ratio", ratio)?;
        }
        for pair in price_history.windows(2) {
            if pair[1].ts < pair[0].ts {
                return Err(ValidationError::UnorderedHistory);
            }
        }

        Ok(Self {
            symbol,
            current_price,
            market_cap,
            pe_ratio,
            volume,
            price_history,
        })
    }
}

/// Outcome of one batch fetch: successfully fetched records keyed by symbol.
///
/// An absent key means that symbol's fetch failed or returned nothing.
/// Presentation code checks `is_empty` to detect a fully failed batch, the
/// one batch outcome that is reported as an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteSet(HashMap<Symbol, QuoteRecord>);

impl QuoteSet {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Insert a record under its own symbol, replacing any previous entry.
    pub fn insert(&mut self, record: QuoteRecord) -> Option<QuoteRecord> {
        self.0.insert(record.symbol.clone(), record)
    }

    pub fn get(&self, symbol: &Symbol) -> Option<&QuoteRecord> {
        self.0.get(symbol)
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.0.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &QuoteRecord)> {
        self.0.iter()
    }
}

impl IntoIterator for QuoteSet {
    type Item = (Symbol, QuoteRecord);
    type IntoIter = hash_map::IntoIter<Symbol, QuoteRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn ensure_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFiniteValue { field })
    }
}

fn ensure_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
