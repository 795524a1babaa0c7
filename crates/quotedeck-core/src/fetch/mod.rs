//! Quote fetching and batch aggregation.
//!
//! [`QuoteFetcher::fetch`] builds one [`QuoteRecord`] from two provider
//! calls (snapshot fields, then the close series). [`QuoteFetcher::fetch_all`]
//! drives that over a symbol list strictly sequentially and keeps whatever
//! succeeded; a symbol that fails is logged and left out rather than
//! failing the batch.

mod payload;

use std::env;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{Period, PricePoint, QuoteRecord, QuoteSet, Symbol};
use crate::error::FetchError;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};

use self::payload::{ChartResponse, QuoteSummaryResponse, SnapshotFields};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const DEFAULT_USER_AGENT: &str = "quotedeck/0.1.0";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the quote fetcher.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Per-request timeout. There is no retry on top of it.
    pub timeout: Duration,
    /// Session cookie for provider deployments that demand one.
    pub cookie: Option<String>,
    /// Crumb token appended to snapshot query strings.
    pub crumb: Option<String>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            user_agent: String::from(DEFAULT_USER_AGENT),
            timeout: DEFAULT_TIMEOUT,
            cookie: None,
            crumb: None,
        }
    }
}

impl FetcherConfig {
    /// Defaults with environment overrides applied: `QUOTEDECK_BASE_URL`,
    /// `YAHOO_COOKIE`, `YAHOO_CRUMB`. Unset or empty variables leave the
    /// default in place (anonymous access against the public endpoints).
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(base_url) = non_empty_var("QUOTEDECK_BASE_URL") {
            config.base_url = base_url;
        }
        config.cookie = non_empty_var("YAHOO_COOKIE");
        config.crumb = non_empty_var("YAHOO_CRUMB");
        config
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Fetches per-symbol market data and aggregates batches.
pub struct QuoteFetcher {
    http: Arc<dyn HttpClient>,
    config: FetcherConfig,
}

impl QuoteFetcher {
    pub fn new(http: Arc<dyn HttpClient>, config: FetcherConfig) -> Self {
        Self { http, config }
    }

    /// Production wiring: a reqwest transport built from the config.
    pub fn from_config(config: FetcherConfig) -> Self {
        let http = Arc::new(ReqwestHttpClient::new(&config.user_agent));
        Self::new(http, config)
    }

    /// Fetch one symbol's snapshot fields and close series.
    ///
    /// Fields the provider omits come back as `None`; a missing chart
    /// window comes back as an empty history. Errors carry the symbol so
    /// callers can decide whether to surface or drop them.
    pub async fn fetch(&self, symbol: &Symbol, period: Period) -> Result<QuoteRecord, FetchError> {
        let snapshot = self.fetch_snapshot(symbol).await?;
        let history = self.fetch_history(symbol, period).await?;

        QuoteRecord::new(
            symbol.clone(),
            snapshot.current_price,
            snapshot.market_cap,
            snapshot.pe_ratio,
            snapshot.volume,
            history,
        )
        .map_err(|cause| FetchError::invalid_record(symbol.clone(), cause))
    }

    /// Fetch a batch, one symbol at a time, keeping whatever succeeded.
    ///
    /// A failed symbol is logged at `warn` and omitted; the result's key
    /// set is always a subset of `symbols`. An empty input returns an
    /// empty set without touching the network. Callers treat an empty
    /// result for a non-empty input as the batch-level failure signal.
    pub async fn fetch_all(&self, symbols: &[Symbol], period: Period) -> QuoteSet {
        let mut quotes = QuoteSet::new();
        for symbol in symbols {
            match self.fetch(symbol, period).await {
                Ok(record) => {
                    quotes.insert(record);
                }
                Err(error) => {
                    log::warn!(
                        "[{symbol}] dropped from batch: {} ({})",
                        error.message(),
                        error.code()
                    );
                }
            }
        }
        quotes
    }

    async fn fetch_snapshot(&self, symbol: &Symbol) -> Result<SnapshotFields, FetchError> {
        let body = self.get(symbol, self.quote_summary_url(symbol)).await?;

        let parsed: QuoteSummaryResponse = serde_json::from_str(&body).map_err(|err| {
            FetchError::malformed_payload(symbol.clone(), format!("quoteSummary: {err}"))
        })?;
        let envelope = parsed.quote_summary.ok_or_else(|| {
            FetchError::malformed_payload(symbol.clone(), "missing quoteSummary envelope")
        })?;
        if let Some(error) = envelope.error {
            return Err(FetchError::provider_reported(
                symbol.clone(),
                error.describe(),
            ));
        }
        let result = envelope
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| {
                FetchError::provider_reported(symbol.clone(), "no quote data for symbol")
            })?;

        Ok(payload::extract_snapshot(&result))
    }

    async fn fetch_history(
        &self,
        symbol: &Symbol,
        period: Period,
    ) -> Result<Vec<PricePoint>, FetchError> {
        let body = self.get(symbol, self.chart_url(symbol, period)).await?;

        let parsed: ChartResponse = serde_json::from_str(&body)
            .map_err(|err| FetchError::malformed_payload(symbol.clone(), format!("chart: {err}")))?;
        let envelope = parsed
            .chart
            .ok_or_else(|| FetchError::malformed_payload(symbol.clone(), "missing chart envelope"))?;
        if let Some(error) = envelope.error {
            return Err(FetchError::provider_reported(
                symbol.clone(),
                error.describe(),
            ));
        }

        // A valid symbol with no data for the window is not an error; the
        // record simply carries an empty series.
        let Some(result) = envelope.result.unwrap_or_default().into_iter().next() else {
            return Ok(Vec::new());
        };

        payload::extract_history(&result)
            .map_err(|cause| FetchError::invalid_record(symbol.clone(), cause))
    }

    async fn get(&self, symbol: &Symbol, url: String) -> Result<String, FetchError> {
        log::debug!("GET {url}");
        let mut request = HttpRequest::get(url)
            .with_timeout(self.config.timeout)
            .with_header("referer", "https://finance.yahoo.com/");
        if let Some(cookie) = &self.config.cookie {
            request = request.with_header("cookie", cookie);
        }

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|err| FetchError::transport(symbol.clone(), err.message()))?;
        if !response.is_success() {
            return Err(FetchError::upstream_status(symbol.clone(), response.status));
        }
        Ok(response.body)
    }

    fn quote_summary_url(&self, symbol: &Symbol) -> String {
        let mut url = format!(
            "{}/v10/finance/quoteSummary/{}?modules=price,summaryDetail,financialData",
            self.config.base_url,
            urlencoding::encode(symbol.as_str())
        );
        if let Some(crumb) = &self.config.crumb {
            url.push_str("&crumb=");
            url.push_str(&urlencoding::encode(crumb));
        }
        url
    }

    fn chart_url(&self, symbol: &Symbol, period: Period) -> String {
        format!(
            "{}/v8/finance/chart/{}?range={}&interval=1d",
            self.config.base_url,
            urlencoding::encode(symbol.as_str()),
            period
        )
    }
}
