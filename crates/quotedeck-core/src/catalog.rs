//! Built-in company directory.
//!
//! The dashboard ships a fixed set of large-cap names so users can type
//! "apple" instead of "AAPL". The directory also labels comparison rows;
//! symbols outside it are still fetchable and fall back to their ticker
//! text as the display name.

use serde::{Deserialize, Serialize};

use crate::{Symbol, ValidationError};

/// One directory entry: display name plus ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyEntry {
    pub name: String,
    pub symbol: Symbol,
}

/// Ordered company directory used to resolve selection inputs and label
/// comparison rows.
#[derive(Debug, Clone, Default)]
pub struct CompanyCatalog {
    entries: Vec<CompanyEntry>,
}

impl CompanyCatalog {
    pub fn new(entries: Vec<CompanyEntry>) -> Self {
        Self { entries }
    }

    /// The fifteen names the dashboard ships with.
    pub fn builtin() -> Self {
        let entries = [
            ("Apple", "AAPL"),
            ("Microsoft", "MSFT"),
            ("Google", "GOOGL"),
            ("Amazon", "AMZN"),
            ("Tesla", "TSLA"),
            ("Nvidia", "NVDA"),
            ("Meta", "META"),
            ("Netflix", "NFLX"),
            ("Infosys", "INFY"),
            ("IBM", "IBM"),
            ("Intel", "INTC"),
            ("AMD", "AMD"),
            ("Oracle", "ORCL"),
            ("Coca Cola", "KO"),
            ("Walmart", "WMT"),
        ]
        .into_iter()
        .map(|(name, ticker)| CompanyEntry {
            name: String::from(name),
            symbol: Symbol::parse(ticker).expect("built-in tickers are valid"),
        })
        .collect();

        Self { entries }
    }

    /// Resolve user input to a ticker: company-name match first
    /// (case-insensitive), then a plain symbol parse. `"apple"` and
    /// `"AAPL"` both land on AAPL; tickers outside the directory still
    /// resolve as themselves.
    pub fn resolve(&self, input: &str) -> Result<Symbol, ValidationError> {
        let needle = input.trim();
        for entry in &self.entries {
            if entry.name.eq_ignore_ascii_case(needle) {
                return Ok(entry.symbol.clone());
            }
        }
        Symbol::parse(needle)
    }

    /// Display name for a symbol, when it is in the directory.
    pub fn name_of(&self, symbol: &Symbol) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.symbol == *symbol)
            .map(|entry| entry.name.as_str())
    }

    pub fn entries(&self) -> &[CompanyEntry] {
        &self.entries
    }
}
