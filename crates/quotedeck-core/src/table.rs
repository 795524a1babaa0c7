//! Comparison-table assembly.

use serde::{Deserialize, Serialize};

use crate::catalog::CompanyCatalog;
use crate::domain::QuoteSet;
use crate::format::{format_currency, format_ratio, format_volume};

/// One display-ready comparison row.
///
/// Every field is already formatted; anything missing shows as `N/A`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub company: String,
    pub symbol: String,
    pub price: String,
    pub market_cap: String,
    pub pe_ratio: String,
    pub volume: String,
}

/// Build one row per fetched record, ordered by symbol.
///
/// Row count always equals `quotes.len()`. The underlying map has no
/// iteration order, so rows sort by symbol to keep repeated renders of the
/// same data identical. Symbols outside the catalog are labeled with their
/// own ticker text. Never fails.
pub fn build_comparison_table(quotes: &QuoteSet, catalog: &CompanyCatalog) -> Vec<ComparisonRow> {
    let mut records: Vec<_> = quotes.iter().collect();
    records.sort_by(|(left, _), (right, _)| left.cmp(right));

    records
        .into_iter()
        .map(|(symbol, record)| ComparisonRow {
            company: catalog.name_of(symbol).unwrap_or(symbol.as_str()).to_owned(),
            symbol: symbol.as_str().to_owned(),
            price: format_currency(record.current_price),
            market_cap: format_currency(record.market_cap.map(|cap| cap as f64)),
            pe_ratio: format_ratio(record.pe_ratio),
            volume: format_volume(record.volume),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{QuoteRecord, Symbol};

    fn symbol(text: &str) -> Symbol {
        Symbol::parse(text).expect("must parse")
    }

    fn record(
        ticker: &str,
        price: Option<f64>,
        cap: Option<u64>,
        pe: Option<f64>,
        volume: Option<u64>,
    ) -> QuoteRecord {
        QuoteRecord::new(symbol(ticker), price, cap, pe, volume, Vec::new()).expect("must build")
    }

    #[test]
    fn one_row_per_record_sorted_by_symbol() {
        let mut quotes = QuoteSet::new();
        quotes.insert(record("MSFT", Some(402.1), None, None, None));
        quotes.insert(record("AAPL", Some(187.5), None, None, None));
        quotes.insert(record("GOOGL", Some(141.8), None, None, None));

        let catalog = CompanyCatalog::builtin();
        let rows = build_comparison_table(&quotes, &catalog);

        assert_eq!(rows.len(), quotes.len());
        let symbols: Vec<_> = rows.iter().map(|row| row.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "GOOGL", "MSFT"]);

        // Same input, same output.
        assert_eq!(rows, build_comparison_table(&quotes, &catalog));
    }

    #[test]
    fn fields_format_independently() {
        let mut quotes = QuoteSet::new();
        quotes.insert(record(
            "AAPL",
            Some(187.5),
            Some(2_900_000_000_000),
            Some(29.412),
            Some(51_000_000),
        ));

        let rows = build_comparison_table(&quotes, &CompanyCatalog::builtin());
        let row = &rows[0];

        assert_eq!(row.company, "Apple");
        assert_eq!(row.price, "$187.50");
        assert_eq!(row.market_cap, "$2.90T");
        assert_eq!(row.pe_ratio, "29.41");
        assert_eq!(row.volume, "51,000,000");
    }

    #[test]
    fn missing_fields_degrade_to_not_available() {
        let mut quotes = QuoteSet::new();
        quotes.insert(record("NFLX", None, None, None, None));

        let rows = build_comparison_table(&quotes, &CompanyCatalog::builtin());
        let row = &rows[0];

        assert_eq!(row.price, "N/A");
        assert_eq!(row.market_cap, "N/A");
        assert_eq!(row.pe_ratio, "N/A");
        assert_eq!(row.volume, "N/A");
    }

    #[test]
    fn unknown_symbol_labeled_with_ticker() {
        let mut quotes = QuoteSet::new();
        quotes.insert(record("SHOP", Some(71.2), None, Some(-4.0), None));

        let rows = build_comparison_table(&quotes, &CompanyCatalog::builtin());
        let row = &rows[0];

        assert_eq!(row.company, "SHOP");
        // Negative P/E is suppressed on screens.
        assert_eq!(row.pe_ratio, "N/A");
    }

    #[test]
    fn zero_market_cap_reads_as_unavailable() {
        let mut quotes = QuoteSet::new();
        quotes.insert(record("IBM", Some(190.0), Some(0), None, Some(0)));

        let rows = build_comparison_table(&quotes, &CompanyCatalog::builtin());
        let row = &rows[0];

        assert_eq!(row.market_cap, "N/A");
        // Integer volume has no zero conflation.
        assert_eq!(row.volume, "0");
    }
}
