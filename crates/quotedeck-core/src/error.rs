use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::domain::Symbol;

/// Validation errors raised by domain constructors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("invalid period '{value}', expected one of 1mo, 3mo, 6mo, 1y, 2y")]
    InvalidPeriod { value: String },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },
    #[error("unix timestamp {value} is out of range")]
    TimestampOutOfRange { value: i64 },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("price history timestamps must be non-decreasing")]
    UnorderedHistory,
}

/// Classification of per-symbol fetch failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Transport,
    UpstreamStatus,
    MalformedPayload,
    ProviderReported,
    InvalidRecord,
}

/// Structured fetch failure carrying the symbol it belongs to.
///
/// Batch callers drop the symbol and keep going; single-symbol callers
/// surface the error as-is. Nothing panics past this boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    symbol: Symbol,
    kind: FetchErrorKind,
    message: String,
}

impl FetchError {
    pub fn transport(symbol: Symbol, message: impl Into<String>) -> Self {
        Self {
            symbol,
            kind: FetchErrorKind::Transport,
            message: message.into(),
        }
    }

    pub fn upstream_status(symbol: Symbol, status: u16) -> Self {
        Self {
            symbol,
            kind: FetchErrorKind::UpstreamStatus,
            message: format!("provider returned HTTP status {status}"),
        }
    }

    pub fn malformed_payload(symbol: Symbol, message: impl Into<String>) -> Self {
        Self {
            symbol,
            kind: FetchErrorKind::MalformedPayload,
            message: message.into(),
        }
    }

    pub fn provider_reported(symbol: Symbol, message: impl Into<String>) -> Self {
        Self {
            symbol,
            kind: FetchErrorKind::ProviderReported,
            message: message.into(),
        }
    }

    pub fn invalid_record(symbol: Symbol, cause: ValidationError) -> Self {
        Self {
            symbol,
            kind: FetchErrorKind::InvalidRecord,
            message: cause.to_string(),
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub const fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            FetchErrorKind::Transport => "fetch.transport",
            FetchErrorKind::UpstreamStatus => "fetch.upstream_status",
            FetchErrorKind::MalformedPayload => "fetch.malformed_payload",
            FetchErrorKind::ProviderReported => "fetch.provider_reported",
            FetchErrorKind::InvalidRecord => "fetch.invalid_record",
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({})", self.symbol, self.message, self.code())
    }
}

impl std::error::Error for FetchError {}
