use serde::Serialize;

use quotedeck_core::{
    format_currency, format_ratio, format_volume, Period, QuoteFetcher, QuoteRecord, Symbol,
};

use crate::cli::QuoteArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct QuoteData {
    quote: QuoteRecord,
}

pub async fn run(args: &QuoteArgs, fetcher: &QuoteFetcher) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let period: Period = args.period.parse()?;

    // Single-symbol calls are fail-fast; drop-and-continue is batch policy.
    let quote = fetcher.fetch(&symbol, period).await?;

    let table = describe(&quote, period);
    let data = serde_json::to_value(QuoteData { quote })?;

    Ok(CommandResult::new(data).with_table(table))
}

fn describe(quote: &QuoteRecord, period: Period) -> Vec<String> {
    vec![
        format!("symbol     : {}", quote.symbol),
        format!("price      : {}", format_currency(quote.current_price)),
        format!(
            "market cap : {}",
            format_currency(quote.market_cap.map(|cap| cap as f64))
        ),
        format!("p/e ratio  : {}", format_ratio(quote.pe_ratio)),
        format!("volume     : {}", format_volume(quote.volume)),
        format!(
            "history    : {} closes over {period}",
            quote.price_history.len()
        ),
    ]
}
