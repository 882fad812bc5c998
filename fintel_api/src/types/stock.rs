//! Per-ticker types: details, price history, news and filings.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::events::SecFiling;

/// Snapshot returned by `/api/stocks/{ticker}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockDetails {
    pub ticker: String,
    pub name: String,
    pub price: PriceBlock,
    pub fundamentals: Fundamentals,
    pub technicals: Technicals,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceBlock {
    pub current: f64,
    /// Absolute change since the previous close.
    pub change: f64,
    pub change_percent: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fundamentals {
    pub pe_ratio: f64,
    pub pb_ratio: f64,
    /// Return on equity as a fraction (0.18 = 18%).
    pub roe: f64,
    /// Year-over-year revenue growth as a fraction.
    pub revenue_growth: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Technicals {
    pub rsi: f64,
    pub macd: f64,
    /// Trend label such as `bullish` or `bearish`.
    pub trend: String,
}

/// OHLCV bars returned by `/api/stocks/{ticker}/history`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockHistory {
    pub ticker: String,
    pub interval: String,
    pub data: Vec<PriceBar>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: f64,
    pub volume: Option<f64>,
    pub adj_close: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockNews {
    pub ticker: String,
    pub news: Vec<NewsArticle>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub headline: String,
    pub summary: Option<String>,
    pub url: Option<String>,
    pub source: Option<String>,
    /// -1.0 (negative) to 1.0 (positive).
    pub sentiment_score: Option<f64>,
    #[serde(with = "crate::types::timestamp")]
    pub published_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockFilings {
    pub ticker: String,
    pub filings: Vec<SecFiling>,
}
