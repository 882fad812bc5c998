use std::time::Duration;

use chrono::NaiveDate;
use fintel_api::types::Action;
use fintel_api::{
    Client, ClientConfig, DateFiltered, DigestHistoryQuery, DigestQuery, EarningsQuery, Error,
    FilingsQuery, InsiderTradingQuery, MacroEventsQuery, NewsQuery, RecentFilingsQuery,
    StockHistoryQuery,
};
use wiremock::matchers::{any, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

async fn mount_fixture(server: &MockServer, route: &str, fixture: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture(fixture)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn get_today_digest_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/digest/today"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("digest_today.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let digest = client
        .get_today_digest(&DigestQuery::default())
        .await
        .unwrap();

    assert_eq!(digest.top_recommendation.ticker, "NVDA");
    assert_eq!(digest.top_recommendation.action, Action::Buy);
    assert_eq!(digest.watch_list.len(), 2);
    assert_eq!(digest.key_events.len(), 2);
}

#[tokio::test]
async fn get_digest_history_sends_default_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/digest/history"))
        .and(query_param("limit", "30"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("digest_history.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let history = client
        .get_digest_history(&DigestHistoryQuery::default())
        .await
        .unwrap();
    assert_eq!(history.count, 2);
}

#[tokio::test]
async fn get_digest_performance_success() {
    let mock_server = MockServer::start().await;
    mount_fixture(&mock_server, "/api/digest/performance", "performance.json").await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let perf = client.get_digest_performance().await.unwrap();
    assert_eq!(perf.total_recommendations, 42);
    assert_eq!(perf.recent_picks.len(), 2);
}

#[tokio::test]
async fn get_stock_uppercases_ticker_path() {
    let mock_server = MockServer::start().await;
    mount_fixture(&mock_server, "/api/stocks/AAPL", "stock_details.json").await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let stock = client.get_stock("aapl").await.unwrap();
    assert_eq!(stock.ticker, "AAPL");
    assert_eq!(stock.price.current, 150.25);
}

#[tokio::test]
async fn get_stock_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stocks/ZZZZ"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"detail":"Ticker ZZZZ not found"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client.get_stock("ZZZZ").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.detail().as_deref(), Some("Ticker ZZZZ not found"));
}

#[tokio::test]
async fn get_stock_history_with_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stocks/AAPL/history"))
        .and(query_param("interval", "1wk"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("stock_history.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let query = StockHistoryQuery::default().with_interval(fintel_api::Interval::Weekly);
    let history = client.get_stock_history("AAPL", &query).await.unwrap();
    assert_eq!(history.data.len(), 2);
}

#[tokio::test]
async fn get_stock_news_sends_default_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stocks/AAPL/news"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("stock_news.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let news = client
        .get_stock_news("AAPL", &NewsQuery::default())
        .await
        .unwrap();
    assert_eq!(news.news.len(), 2);
}

#[tokio::test]
async fn get_stock_filings_with_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stocks/AAPL/filings"))
        .and(query_param("filing_type", "10-K"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("stock_filings.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let filings = client
        .get_stock_filings("AAPL", &FilingsQuery::default().with_filing_type("10-K"))
        .await
        .unwrap();
    assert_eq!(filings.filings.len(), 2);
}

#[tokio::test]
async fn get_event_endpoints() {
    let mock_server = MockServer::start().await;
    mount_fixture(&mock_server, "/api/events/earnings", "earnings.json").await;
    mount_fixture(&mock_server, "/api/events/macro", "macro_events.json").await;

    Mock::given(method("GET"))
        .and(path("/api/events/filings/recent"))
        .and(query_param("days", "7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("recent_filings.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/events/insider-trading"))
        .and(query_param("days", "30"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("insider_trading.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();

    let earnings = client
        .get_earnings_calendar(&EarningsQuery::default())
        .await
        .unwrap();
    assert_eq!(earnings.earnings.len(), 2);

    let macro_events = client
        .get_macro_events(&MacroEventsQuery::default())
        .await
        .unwrap();
    assert_eq!(macro_events.events.len(), 2);

    let filings = client
        .get_recent_filings(&RecentFilingsQuery::default())
        .await
        .unwrap();
    assert_eq!(filings.count, 1);

    let insider = client
        .get_insider_trading(&InsiderTradingQuery::default())
        .await
        .unwrap();
    assert_eq!(insider.transactions.len(), 1);
}

#[tokio::test]
async fn get_health_and_readiness() {
    let mock_server = MockServer::start().await;
    mount_fixture(&mock_server, "/health/", "health.json").await;
    mount_fixture(&mock_server, "/health/ready", "readiness.json").await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    assert!(client.get_health().await.unwrap().is_healthy());
    assert!(client.get_readiness().await.unwrap().is_ready());
}

#[tokio::test]
async fn server_error_keeps_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/digest/today"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string(r#"{"detail":"digest generation failed"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client
        .get_today_digest(&DigestQuery::default())
        .await
        .unwrap_err();
    match &err {
        Error::HttpStatus { status, body } => {
            assert_eq!(*status, 500);
            assert_eq!(body, r#"{"detail":"digest generation failed"}"#);
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
    assert_eq!(err.detail().as_deref(), Some("digest generation failed"));
}

#[tokio::test]
async fn malformed_json_is_decode_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/digest/today"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client
        .get_today_digest(&DigestQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn missing_field_is_decode_failure() {
    let mock_server = MockServer::start().await;
    mount_fixture(
        &mock_server,
        "/api/digest/today",
        "digest_missing_stop_loss.json",
    )
    .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client
        .get_today_digest(&DigestQuery::default())
        .await
        .unwrap_err();
    match err {
        Error::Decode { source, body } => {
            assert!(source.to_string().contains("stop_loss"));
            assert!(body.contains("NVDA"));
        }
        other => panic!("expected Decode, got {:?}", other),
    }
}

#[tokio::test]
async fn slow_response_is_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/digest/today"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("digest_today.json"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config = ClientConfig::default()
        .with_base_url(&mock_server.uri())
        .unwrap()
        .with_timeout(Duration::from_millis(200));
    let client = Client::new(config).unwrap();
    let err = client
        .get_today_digest(&DigestQuery::default())
        .await
        .unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {:?}", err);
}

#[tokio::test]
async fn connection_refused_is_transport_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = Client::with_base_url(&format!("http://127.0.0.1:{}", port)).unwrap();
    let err = client
        .get_today_digest(&DigestQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got {:?}", err);
    assert!(!err.is_timeout());
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let mock_server = MockServer::start().await;
    mount_fixture(&mock_server, "/api/digest/today", "digest_today.json").await;

    Mock::given(method("GET"))
        .and(path("/api/stocks/AAPL"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let digest_query = DigestQuery::default();
    let (digest, stock) = tokio::join!(
        client.get_today_digest(&digest_query),
        client.get_stock("AAPL")
    );

    assert_eq!(digest.unwrap().top_recommendation.ticker, "NVDA");
    assert_eq!(stock.unwrap_err().status(), Some(503));
}

#[tokio::test]
async fn invalid_input_sends_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();

    let err = client.get_stock("  ").await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));

    let err = client
        .get_digest_history(&DigestHistoryQuery::default().with_limit(0))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));

    let err = client
        .get_stock_news("AAPL/../../admin", &NewsQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));

    let reversed = EarningsQuery::default()
        .with_start_date(NaiveDate::from_ymd_opt(2024, 11, 21).unwrap())
        .with_end_date(NaiveDate::from_ymd_opt(2024, 11, 14).unwrap());
    let err = client.get_earnings_calendar(&reversed).await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));

    let reversed = StockHistoryQuery::default()
        .with_start_date(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap())
        .with_end_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    let err = client.get_stock_history("AAPL", &reversed).await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));

    let err = client
        .get_stock_filings("AAPL", &FilingsQuery::default().with_filing_type("8\u{7}-K"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[tokio::test]
async fn configured_base_address_is_used() {
    let mock_server = MockServer::start().await;
    mount_fixture(&mock_server, "/health/", "health.json").await;

    let uri = mock_server.uri();
    let config = ClientConfig::from_lookup(|_| Some(uri.clone())).unwrap();
    assert_eq!(config.base_url(), uri);

    let client = Client::new(config).unwrap();
    let health = client.get_health().await.unwrap();
    assert_eq!(health.service, "Fintech Intelligence Platform API");
}
