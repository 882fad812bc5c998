//! HTTP client for the fintel analytics service.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    config::ClientConfig,
    query::{
        DigestHistoryQuery, DigestQuery, EarningsQuery, EmptyQuery, FilingsQuery,
        InsiderTradingQuery, MacroEventsQuery, NewsQuery, Query, RecentFilingsQuery,
        StockHistoryQuery,
    },
    types::{
        DailyDigest, DigestHistory, EarningsCalendar, HealthStatus, InsiderTrading, MacroEvents,
        PerformanceReport, ReadinessStatus, RecentFilings, StockDetails, StockFilings,
        StockHistory, StockNews,
    },
    validation, Error,
};

/// HTTP client for the fintel analytics service.
///
/// One `reqwest::Client` is built from the [`ClientConfig`] at construction
/// and reused for every request. Cloning is cheap and clones share the
/// connection pool. Each call is a single GET with no retry or caching.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Creates a client from an explicit configuration.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        Ok(Self { http, config })
    }

    /// Creates a client configured from `FINTEL_API_URL`.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Creates a client with default settings and a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig::default().with_base_url(base_url)?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", self.config.base_url(), path).as_str()).map_err(
            |e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::InvalidBaseUrl(format!("{}{}: {}", self.config.base_url(), path, e))
            },
        )?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        if let Some(query) = query {
            query.validate()?;
        }
        let url = self.get_url(path, query)?;
        tracing::debug!("GET {}", url);

        let resp = self.http.get(url.clone()).send().await.map_err(|e| {
            tracing::error!("Failed to get resource {}: {}", url, e);
            Error::from_reqwest(e, url.as_str())
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body from {}: {}", url, e);
            Error::from_reqwest(e, url.as_str())
        })?;

        if status == StatusCode::NOT_FOUND {
            tracing::error!("Resource not found: {}", url);
            return Err(Error::NotFound {
                url: url.to_string(),
                body,
            });
        }

        if !status.is_success() {
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse resource: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::Decode { source: e, body }
        })
    }

    // -- Digest --

    /// Fetches the daily digest (today's unless the query names a date).
    pub async fn get_today_digest(&self, query: &DigestQuery) -> Result<DailyDigest, Error> {
        self.get::<DailyDigest, DigestQuery>("/api/digest/today", Some(query))
            .await
    }

    /// Fetches past digests. The limit defaults to 30.
    pub async fn get_digest_history(
        &self,
        query: &DigestHistoryQuery,
    ) -> Result<DigestHistory, Error> {
        self.get::<DigestHistory, DigestHistoryQuery>("/api/digest/history", Some(query))
            .await
    }

    /// Fetches the track record of past recommendations.
    pub async fn get_digest_performance(&self) -> Result<PerformanceReport, Error> {
        self.get::<PerformanceReport, EmptyQuery>("/api/digest/performance", None)
            .await
    }

    // -- Stocks --

    /// Fetches details for a single ticker. An unknown ticker yields [`Error::NotFound`].
    pub async fn get_stock(&self, ticker: &str) -> Result<StockDetails, Error> {
        let ticker = validation::validate_ticker(ticker)?;
        self.get::<StockDetails, EmptyQuery>(format!("/api/stocks/{}", ticker).as_str(), None)
            .await
    }

    pub async fn get_stock_history(
        &self,
        ticker: &str,
        query: &StockHistoryQuery,
    ) -> Result<StockHistory, Error> {
        let ticker = validation::validate_ticker(ticker)?;
        self.get::<StockHistory, StockHistoryQuery>(
            format!("/api/stocks/{}/history", ticker).as_str(),
            Some(query),
        )
        .await
    }

    /// Fetches recent news for a ticker. The limit defaults to 10.
    pub async fn get_stock_news(&self, ticker: &str, query: &NewsQuery) -> Result<StockNews, Error> {
        let ticker = validation::validate_ticker(ticker)?;
        self.get::<StockNews, NewsQuery>(
            format!("/api/stocks/{}/news", ticker).as_str(),
            Some(query),
        )
        .await
    }

    pub async fn get_stock_filings(
        &self,
        ticker: &str,
        query: &FilingsQuery,
    ) -> Result<StockFilings, Error> {
        let ticker = validation::validate_ticker(ticker)?;
        self.get::<StockFilings, FilingsQuery>(
            format!("/api/stocks/{}/filings", ticker).as_str(),
            Some(query),
        )
        .await
    }

    // -- Events --

    pub async fn get_earnings_calendar(
        &self,
        query: &EarningsQuery,
    ) -> Result<EarningsCalendar, Error> {
        self.get::<EarningsCalendar, EarningsQuery>("/api/events/earnings", Some(query))
            .await
    }

    /// Fetches SEC filings across all tickers. The lookback defaults to 7 days.
    pub async fn get_recent_filings(
        &self,
        query: &RecentFilingsQuery,
    ) -> Result<RecentFilings, Error> {
        self.get::<RecentFilings, RecentFilingsQuery>("/api/events/filings/recent", Some(query))
            .await
    }

    pub async fn get_macro_events(&self, query: &MacroEventsQuery) -> Result<MacroEvents, Error> {
        self.get::<MacroEvents, MacroEventsQuery>("/api/events/macro", Some(query))
            .await
    }

    /// Fetches insider (Form 4) activity. The lookback defaults to 30 days.
    pub async fn get_insider_trading(
        &self,
        query: &InsiderTradingQuery,
    ) -> Result<InsiderTrading, Error> {
        self.get::<InsiderTrading, InsiderTradingQuery>("/api/events/insider-trading", Some(query))
            .await
    }

    // -- Health --

    pub async fn get_health(&self) -> Result<HealthStatus, Error> {
        self.get::<HealthStatus, EmptyQuery>("/health/", None).await
    }

    pub async fn get_readiness(&self) -> Result<ReadinessStatus, Error> {
        self.get::<ReadinessStatus, EmptyQuery>("/health/ready", None)
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
