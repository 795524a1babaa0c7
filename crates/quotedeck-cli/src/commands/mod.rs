mod companies;
mod compare;
mod history;
mod quote;

use std::time::Instant;

use quotedeck_core::{FetcherConfig, QuoteFetcher};
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::output::Envelope;

/// What a command hands back: a JSON-able payload, its table rendering,
/// and any warnings to surface alongside either.
pub struct CommandResult {
    pub data: Value,
    pub table: Vec<String>,
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn new(data: Value) -> Self {
        Self {
            data,
            table: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn with_table(mut self, lines: Vec<String>) -> Self {
        self.table = lines;
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }
}

pub async fn run(cli: &Cli) -> Result<Envelope, CliError> {
    let started = Instant::now();
    let fetcher = QuoteFetcher::from_config(FetcherConfig::from_env());

    let result = match &cli.command {
        Command::Quote(args) => quote::run(args, &fetcher).await?,
        Command::Compare(args) => compare::run(args, &fetcher).await?,
        Command::History(args) => history::run(args, &fetcher).await?,
        Command::Companies => companies::run()?,
    };

    let CommandResult {
        data,
        table,
        warnings,
    } = result;

    Ok(Envelope::new(data, table, warnings, started.elapsed()))
}
