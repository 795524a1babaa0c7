//! Core contracts for quotedeck.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - The Yahoo quote fetcher and fault-isolating batch aggregation
//! - Display formatting with uniform `N/A` degradation
//! - The built-in company catalog and comparison-table assembly

pub mod catalog;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod format;
pub mod http_client;
pub mod table;

pub use catalog::{CompanyCatalog, CompanyEntry};
pub use domain::{Period, PricePoint, QuoteRecord, QuoteSet, Symbol, UtcDateTime};
pub use error::{FetchError, FetchErrorKind, ValidationError};
pub use fetch::{FetcherConfig, QuoteFetcher};
pub use format::{format_currency, format_ratio, format_volume, NOT_AVAILABLE};
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};
pub use table::{build_comparison_table, ComparisonRow};
