//! Domain types for quote data.
//!
//! Everything here is validated at construction and serializable:
//!
//! - [`Symbol`]: normalized ticker, the key of every lookup.
//! - [`Period`]: supported lookback window (`1mo` through `2y`).
//! - [`UtcDateTime`]: RFC3339 UTC timestamp.
//! - [`PricePoint`] / [`QuoteRecord`]: one close-series entry and the
//!   per-company snapshot built from a provider response.
//! - [`QuoteSet`]: the symbol-keyed outcome of a batch fetch.
//!
//! Numeric fields model "unavailable" as `None` rather than a sentinel
//! zero; only the display formatters collapse the two.

mod period;
mod quote;
mod symbol;
mod timestamp;

pub use period::Period;
pub use quote::{PricePoint, QuoteRecord, QuoteSet};
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
