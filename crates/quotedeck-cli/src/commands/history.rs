use serde::Serialize;

use quotedeck_core::{Period, PricePoint, QuoteFetcher, Symbol};

use crate::cli::HistoryArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct HistoryData {
    symbol: Symbol,
    period: Period,
    points: Vec<PricePoint>,
}

pub async fn run(args: &HistoryArgs, fetcher: &QuoteFetcher) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let period: Period = args.period.parse()?;

    let quote = fetcher.fetch(&symbol, period).await?;

    let mut warnings = Vec::new();
    if quote.price_history.is_empty() {
        warnings.push(format!(
            "{symbol}: provider returned no closes for {period}"
        ));
    }

    let table = render_points(&symbol, period, &quote.price_history);
    let data = serde_json::to_value(HistoryData {
        symbol,
        period,
        points: quote.price_history,
    })?;

    Ok(CommandResult::new(data)
        .with_table(table)
        .with_warnings(warnings))
}

fn render_points(symbol: &Symbol, period: Period, points: &[PricePoint]) -> Vec<String> {
    let mut lines = Vec::with_capacity(points.len() + 1);
    lines.push(format!(
        "{symbol} closes, last {period} ({} points)",
        points.len()
    ));
    for point in points {
        lines.push(format!("{}  {:>10.2}", point.ts, point.close));
    }
    lines
}
