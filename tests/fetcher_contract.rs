//! Behavior-driven tests for the quote fetcher contract
//!
//! These tests verify HOW the fetcher turns provider payloads into quote
//! records: field extraction, explicit absence, and the error taxonomy for
//! every failure shape the transport or provider can produce.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use quotedeck_core::{
    FetchErrorKind, FetcherConfig, HttpClient, HttpError, HttpRequest, HttpResponse, Period,
    QuoteFetcher, Symbol,
};

// =============================================================================
// Scripted transport
// =============================================================================

/// Canned-response transport: the first URL-substring match wins, anything
/// unscripted answers an empty JSON object. Every request is recorded.
#[derive(Debug, Default)]
struct ScriptedHttpClient {
    scripts: Vec<(String, Result<HttpResponse, HttpError>)>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    fn new() -> Self {
        Self::default()
    }

    fn on_body(mut self, url_part: &str, body: &str) -> Self {
        self.scripts
            .push((url_part.to_string(), Ok(HttpResponse::ok_json(body))));
        self
    }

    fn on_status(mut self, url_part: &str, status: u16) -> Self {
        self.scripts.push((
            url_part.to_string(),
            Ok(HttpResponse {
                status,
                body: String::new(),
            }),
        ));
        self
    }

    fn on_transport_failure(mut self, url_part: &str, message: &str) -> Self {
        self.scripts
            .push((url_part.to_string(), Err(HttpError::new(message))));
        self
    }

    fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let outcome = self
            .scripts
            .iter()
            .find(|(part, _)| request.url.contains(part.as_str()))
            .map(|(_, outcome)| outcome.clone())
            .unwrap_or_else(|| Ok(HttpResponse::ok_json("{}")));
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        Box::pin(async move { outcome })
    }
}

const SNAPSHOT_BODY: &str = r#"{"quoteSummary":{"result":[{
    "price":{"regularMarketPrice":{"raw":187.3},"regularMarketVolume":{"raw":51000000},"marketCap":{"raw":2900000000000}},
    "summaryDetail":{"trailingPE":{"raw":29.412},"volume":{"raw":50123456}},
    "financialData":{"currentPrice":{"raw":187.55}}
}],"error":null}}"#;

const CHART_BODY: &str = r#"{"chart":{"result":[{
    "timestamp":[1704067200,1704153600,1704240000],
    "indicators":{"quote":[{"close":[185.0,null,187.5]}]}
}],"error":null}}"#;

fn symbol(text: &str) -> Symbol {
    Symbol::parse(text).expect("valid symbol")
}

fn fetcher(client: &Arc<ScriptedHttpClient>) -> QuoteFetcher {
    QuoteFetcher::new(client.clone(), FetcherConfig::default())
}

// =============================================================================
// Payload extraction
// =============================================================================

#[tokio::test]
async fn when_provider_returns_full_payloads_record_carries_every_field() {
    // Given: snapshot and chart responses with all consumed fields populated
    let client = Arc::new(
        ScriptedHttpClient::new()
            .on_body("quoteSummary", SNAPSHOT_BODY)
            .on_body("chart", CHART_BODY),
    );

    // When: one symbol is fetched
    let record = fetcher(&client)
        .fetch(&symbol("AAPL"), Period::OneMonth)
        .await
        .expect("fetch should succeed");

    // Then: every field lands in the record, nulled closes dropped
    assert_eq!(record.symbol.as_str(), "AAPL");
    assert_eq!(record.current_price, Some(187.55));
    assert_eq!(record.market_cap, Some(2_900_000_000_000));
    assert_eq!(record.pe_ratio, Some(29.412));
    assert_eq!(record.volume, Some(50_123_456));
    assert_eq!(record.price_history.len(), 2);
    assert_eq!(record.price_history[0].close, 185.0);
    assert_eq!(record.price_history[0].ts.unix_seconds(), 1_704_067_200);
    assert_eq!(record.price_history[1].close, 187.5);
}

#[tokio::test]
async fn when_payload_omits_fields_record_keeps_explicit_absences() {
    // Given: a result whose modules are all missing and a chart with no data
    let client = Arc::new(
        ScriptedHttpClient::new()
            .on_body("quoteSummary", r#"{"quoteSummary":{"result":[{}],"error":null}}"#)
            .on_body("chart", r#"{"chart":{"result":[],"error":null}}"#),
    );

    // When
    let record = fetcher(&client)
        .fetch(&symbol("AAPL"), Period::OneMonth)
        .await
        .expect("fetch should succeed");

    // Then: absence is None across the record, never an error or a zero
    assert_eq!(record.current_price, None);
    assert_eq!(record.market_cap, None);
    assert_eq!(record.pe_ratio, None);
    assert_eq!(record.volume, None);
    assert!(record.price_history.is_empty());
}

// =============================================================================
// Request shape
// =============================================================================

#[tokio::test]
async fn when_cookie_and_crumb_are_configured_requests_carry_them() {
    // Given: a config with session credentials
    let client = Arc::new(
        ScriptedHttpClient::new()
            .on_body("quoteSummary", SNAPSHOT_BODY)
            .on_body("chart", CHART_BODY),
    );
    let config = FetcherConfig {
        cookie: Some(String::from("B=session-token")),
        crumb: Some(String::from("xyz")),
        ..FetcherConfig::default()
    };
    let fetcher = QuoteFetcher::new(client.clone(), config);

    // When
    fetcher
        .fetch(&symbol("AAPL"), Period::OneMonth)
        .await
        .expect("fetch should succeed");

    // Then: snapshot first, then chart, both authenticated
    let requests = client.recorded_requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].url.contains("/v10/finance/quoteSummary/AAPL"));
    assert!(requests[0].url.contains("modules=price,summaryDetail,financialData"));
    assert!(requests[0].url.ends_with("&crumb=xyz"));
    assert!(requests[1]
        .url
        .contains("/v8/finance/chart/AAPL?range=1mo&interval=1d"));
    for request in &requests {
        assert_eq!(
            request.headers.get("cookie").map(String::as_str),
            Some("B=session-token")
        );
        assert_eq!(
            request.headers.get("referer").map(String::as_str),
            Some("https://finance.yahoo.com/")
        );
    }
}

// =============================================================================
// Error taxonomy
// =============================================================================

#[tokio::test]
async fn when_provider_reports_unknown_symbol_error_kind_is_provider_reported() {
    // Given: the in-band error envelope the provider sends for dead tickers
    let body = r#"{"quoteSummary":{"result":null,"error":{"code":"Not Found","description":"Quote not found for ticker symbol: ZZZZ"}}}"#;
    let client = Arc::new(ScriptedHttpClient::new().on_body("quoteSummary", body));

    // When
    let error = fetcher(&client)
        .fetch(&symbol("ZZZZ"), Period::OneMonth)
        .await
        .expect_err("fetch should fail");

    // Then: the error is classified and the chart call never goes out
    assert_eq!(error.kind(), FetchErrorKind::ProviderReported);
    assert_eq!(error.symbol().as_str(), "ZZZZ");
    assert!(error.message().contains("Quote not found"));
    assert_eq!(client.recorded_requests().len(), 1);
}

#[tokio::test]
async fn when_quote_summary_result_is_empty_error_kind_is_provider_reported() {
    // Given: a 200 with an empty result list and no error object
    let client = Arc::new(
        ScriptedHttpClient::new()
            .on_body("quoteSummary", r#"{"quoteSummary":{"result":[],"error":null}}"#),
    );

    // When
    let error = fetcher(&client)
        .fetch(&symbol("AAPL"), Period::OneMonth)
        .await
        .expect_err("fetch should fail");

    // Then
    assert_eq!(error.kind(), FetchErrorKind::ProviderReported);
    assert!(error.message().contains("no quote data"));
}

#[tokio::test]
async fn when_provider_returns_404_error_kind_is_upstream_status() {
    // Given
    let client = Arc::new(ScriptedHttpClient::new().on_status("quoteSummary", 404));

    // When
    let error = fetcher(&client)
        .fetch(&symbol("AAPL"), Period::OneMonth)
        .await
        .expect_err("fetch should fail");

    // Then: status is classified, named, and machine-coded
    assert_eq!(error.kind(), FetchErrorKind::UpstreamStatus);
    assert!(error.message().contains("404"));
    assert_eq!(error.code(), "fetch.upstream_status");
}

#[tokio::test]
async fn when_payload_is_not_json_error_kind_is_malformed_payload() {
    // Given: the HTML body rate limiters serve instead of JSON
    let client = Arc::new(
        ScriptedHttpClient::new().on_body("quoteSummary", "<html>rate limited</html>"),
    );

    // When
    let error = fetcher(&client)
        .fetch(&symbol("AAPL"), Period::OneMonth)
        .await
        .expect_err("fetch should fail");

    // Then
    assert_eq!(error.kind(), FetchErrorKind::MalformedPayload);
    assert_eq!(error.symbol().as_str(), "AAPL");
}

#[tokio::test]
async fn when_transport_fails_error_kind_is_transport() {
    // Given
    let client = Arc::new(
        ScriptedHttpClient::new().on_transport_failure("quoteSummary", "connection refused"),
    );

    // When
    let error = fetcher(&client)
        .fetch(&symbol("AAPL"), Period::OneMonth)
        .await
        .expect_err("fetch should fail");

    // Then
    assert_eq!(error.kind(), FetchErrorKind::Transport);
    assert!(error.message().contains("connection refused"));
}

#[tokio::test]
async fn when_chart_timestamps_regress_error_kind_is_invalid_record() {
    // Given: a chart series the provider delivered out of order
    let chart = r#"{"chart":{"result":[{
        "timestamp":[200,100],
        "indicators":{"quote":[{"close":[10.0,11.0]}]}
    }],"error":null}}"#;
    let client = Arc::new(
        ScriptedHttpClient::new()
            .on_body("quoteSummary", SNAPSHOT_BODY)
            .on_body("chart", chart),
    );

    // When
    let error = fetcher(&client)
        .fetch(&symbol("AAPL"), Period::OneMonth)
        .await
        .expect_err("fetch should fail");

    // Then: record validation catches it rather than a panic downstream
    assert_eq!(error.kind(), FetchErrorKind::InvalidRecord);
    assert!(error.message().contains("non-decreasing"));
}

#[tokio::test]
async fn fetch_error_display_names_symbol_message_and_code() {
    // Given
    let client = Arc::new(ScriptedHttpClient::new().on_status("quoteSummary", 503));

    // When
    let error = fetcher(&client)
        .fetch(&symbol("AAPL"), Period::OneMonth)
        .await
        .expect_err("fetch should fail");

    // Then: one line a batch log or stderr can print as-is
    assert_eq!(
        error.to_string(),
        "AAPL: provider returned HTTP status 503 (fetch.upstream_status)"
    );
}
