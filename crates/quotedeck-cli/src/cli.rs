//! CLI argument definitions for QuoteDeck.
//!
//! This module contains the command-line interface structure using Clap.
//! The CLI drives the quote library the same way the dashboard does: pick
//! symbols and a lookback period, fetch, render.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `quote` | Fetch the full quote record for one symbol |
//! | `compare` | Fetch several companies and print a comparison table |
//! | `history` | Fetch the historical close series for one symbol |
//! | `companies` | List the built-in company directory |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//!
//! # Examples
//!
//! ```bash
//! # One symbol, full record
//! quotedeck quote AAPL
//!
//! # Compare by company name or ticker over six months
//! quotedeck compare apple MSFT "coca cola" --period 6mo
//!
//! # Close series as JSON
//! quotedeck history TSLA --period 1y --format json --pretty
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// 📈 QuoteDeck - Multi-symbol stock quote and comparison CLI
///
/// Fetches current quotes, fundamentals, and close histories from Yahoo
/// Finance and renders display-ready tables or JSON envelopes.
#[derive(Debug, Parser)]
#[command(
    name = "quotedeck",
    author,
    version,
    about = "Multi-symbol stock quote and comparison CLI",
    long_about = "QuoteDeck fetches quotes and fundamentals for one or more ticker symbols \
and renders them for terminal display. Features include:\n\
\n\
  • Per-symbol fault isolation: a comparison showing 4 of 5 stocks succeeds\n\
  • Company-name resolution for the built-in large-cap directory\n\
  • Uniform N/A degradation for missing provider data\n\
  • Structured JSON output with request metadata\n\
\n\
Use 'quotedeck <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    ///
    /// - table: aligned plain-text columns (default)
    /// - json: envelope with data and request metadata
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text columns for terminal display.
    Table,
    /// Single JSON envelope output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// 💰 Fetch the full quote record for one symbol.
    ///
    /// Returns current price, market cap, trailing P/E, volume, and the
    /// close series for the requested period. A fetch failure here is
    /// fatal; the drop-and-continue policy applies to batches only.
    ///
    /// # Examples
    ///
    ///   quotedeck quote AAPL
    ///   quotedeck quote MSFT --period 2y --format json
    Quote(QuoteArgs),

    /// 📊 Fetch several companies and print a comparison table.
    ///
    /// Inputs may be directory names ("apple") or raw tickers (AAPL).
    /// Symbols whose fetch fails are dropped with a warning; the command
    /// fails only when nothing at all could be fetched.
    ///
    /// # Examples
    ///
    ///   quotedeck compare apple microsoft google
    ///   quotedeck compare AAPL SHOP --period 3mo --pretty --format json
    Compare(CompareArgs),

    /// 🗓 Fetch the historical close series for one symbol.
    ///
    /// Prints one (timestamp, close) pair per trading day in the period.
    ///
    /// # Examples
    ///
    ///   quotedeck history TSLA
    ///   quotedeck history NVDA --period 1y
    History(HistoryArgs),

    /// 🏢 List the built-in company directory (no network).
    Companies,
}

/// Arguments for the `quote` command.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Market symbol to fetch (e.g., AAPL).
    pub symbol: String,

    /// Lookback period for the close series.
    ///
    /// Supported periods: 1mo, 3mo, 6mo, 1y, 2y.
    #[arg(long, default_value = "1mo")]
    pub period: String,
}

/// Arguments for the `compare` command.
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Companies to compare: directory names or market symbols.
    #[arg(required = true, num_args = 1..)]
    pub companies: Vec<String>,

    /// Lookback period for each close series.
    ///
    /// Supported periods: 1mo, 3mo, 6mo, 1y, 2y.
    #[arg(long, default_value = "1mo")]
    pub period: String,
}

/// Arguments for the `history` command.
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Market symbol to fetch (e.g., TSLA).
    pub symbol: String,

    /// Lookback period.
    ///
    /// Supported periods: 1mo, 3mo, 6mo, 1y, 2y.
    #[arg(long, default_value = "1mo")]
    pub period: String,
}
