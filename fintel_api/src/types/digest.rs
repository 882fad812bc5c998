//! Daily digest types: the market summary, the top pick, and the track record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::recommendation::{Action, Recommendation};

/// The daily digest returned by `/api/digest/today`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyDigest {
    pub date: NaiveDate,

    #[serde(with = "crate::types::timestamp")]
    pub generated_at: DateTime<Utc>,

    pub market_summary: MarketSummary,

    /// The one pick of the day.
    pub top_recommendation: Recommendation,

    /// Secondary tickers to monitor, in the order the service ranked them.
    pub watch_list: Vec<WatchListEntry>,

    pub key_events: Vec<KeyEvent>,

    pub macro_context: MacroContext,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub overnight_moves: OvernightMoves,
    pub key_driver: String,
}

/// Overnight index moves, in percent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OvernightMoves {
    pub sp500_change: f64,
    pub nasdaq_change: f64,
    pub dow_change: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WatchListEntry {
    pub ticker: String,
    pub reason: String,
    pub score: f64,
}

/// A scheduled event for the trading day, e.g. a data release at `10:00 AM ET`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub time: String,
    pub event: String,
    pub expected_impact: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MacroContext {
    pub fed_policy: String,
    pub inflation: String,
    pub sentiment: String,
}

/// Past digests returned by `/api/digest/history`, newest first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DigestHistory {
    pub digests: Vec<DailyDigest>,
    pub count: u32,
}

/// Track record of past recommendations returned by `/api/digest/performance`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub total_recommendations: u32,
    /// Fraction of picks that closed positive, 0.0-1.0.
    pub win_rate: f64,
    /// Mean return per pick, in percent.
    pub average_return: f64,
    pub sharpe_ratio: f64,
    /// Excess return over the S&P 500, in percent.
    pub vs_sp500: f64,
    pub recent_picks: Vec<RecentPick>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecentPick {
    pub ticker: String,
    pub recommendation_date: NaiveDate,
    pub action: Action,
    pub entry_price: f64,
    /// Return since the pick, in percent. `None` while the position is too new to score.
    pub return_pct: Option<f64>,
}
