use serde::Serialize;

use quotedeck_core::{
    build_comparison_table, CompanyCatalog, ComparisonRow, Period, QuoteFetcher, QuoteSet, Symbol,
};

use crate::cli::CompareArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct CompareData {
    rows: Vec<ComparisonRow>,
}

pub async fn run(args: &CompareArgs, fetcher: &QuoteFetcher) -> Result<CommandResult, CliError> {
    let catalog = CompanyCatalog::builtin();
    let period: Period = args.period.parse()?;

    let mut symbols = Vec::with_capacity(args.companies.len());
    for input in &args.companies {
        symbols.push(catalog.resolve(input)?);
    }
    log::debug!("comparing {} symbol(s) over {period}", symbols.len());

    let quotes = fetcher.fetch_all(&symbols, period).await;
    if quotes.is_empty() {
        return Err(CliError::EmptyResult {
            requested: symbols.len(),
        });
    }

    let warnings = dropped_warnings(&symbols, &quotes);
    let rows = build_comparison_table(&quotes, &catalog);
    let table = render_rows(&rows);
    let data = serde_json::to_value(CompareData { rows })?;

    Ok(CommandResult::new(data)
        .with_table(table)
        .with_warnings(warnings))
}

/// One warning per distinct requested symbol missing from the result.
fn dropped_warnings(requested: &[Symbol], quotes: &QuoteSet) -> Vec<String> {
    let mut missing: Vec<&Symbol> = requested
        .iter()
        .filter(|symbol| !quotes.contains(symbol))
        .collect();
    missing.sort();
    missing.dedup();

    missing
        .into_iter()
        .map(|symbol| format!("{symbol}: no quote fetched, dropped from comparison"))
        .collect()
}

const HEADERS: [&str; 6] = ["Company", "Symbol", "Price", "Market Cap", "P/E", "Volume"];

fn row_cells(row: &ComparisonRow) -> [&str; 6] {
    [
        row.company.as_str(),
        row.symbol.as_str(),
        row.price.as_str(),
        row.market_cap.as_str(),
        row.pe_ratio.as_str(),
        row.volume.as_str(),
    ]
}

fn render_rows(rows: &[ComparisonRow]) -> Vec<String> {
    let mut widths: [usize; 6] = HEADERS.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row_cells(row)) {
            *width = (*width).max(cell.len());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_line(&HEADERS, &widths));
    for row in rows {
        lines.push(render_line(&row_cells(row), &widths));
    }
    lines
}

fn render_line(cells: &[&str; 6], widths: &[usize; 6]) -> String {
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths.iter().copied()).enumerate() {
        if index > 0 {
            line.push_str("  ");
        }
        line.push_str(&format!("{cell:<width$}"));
    }
    line.trim_end().to_string()
}
