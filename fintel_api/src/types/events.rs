//! Market event types: earnings, SEC filings, macro releases and insider trades.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Upcoming earnings returned by `/api/events/earnings`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EarningsCalendar {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub earnings: Vec<EarningsEvent>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EarningsEvent {
    pub ticker: String,
    pub company: String,
    pub date: NaiveDate,
    /// Session of the announcement, e.g. `before_market` or `after_market`.
    pub time: String,
    pub eps_estimate: Option<f64>,
    /// Revenue estimate in billions of dollars.
    pub revenue_estimate: Option<f64>,
}

/// An SEC filing (8-K, 10-K, 10-Q, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SecFiling {
    pub ticker: Option<String>,
    pub filing_type: String,
    pub filing_date: NaiveDate,
    pub url: Option<String>,
    pub summary: Option<String>,
    /// Set when the filing reports a material event.
    pub is_material: bool,
}

/// Filings across all tickers returned by `/api/events/filings/recent`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecentFilings {
    pub filings: Vec<SecFiling>,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MacroEvents {
    pub events: Vec<MacroEvent>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MacroEvent {
    pub date: NaiveDate,
    pub event: String,
    pub importance: String,
    pub previous: Option<f64>,
    pub forecast: Option<f64>,
}

/// Form 4 activity returned by `/api/events/insider-trading`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsiderTrading {
    /// Echo of the ticker filter, `None` when unfiltered.
    pub ticker: Option<String>,
    pub transactions: Vec<InsiderTransaction>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsiderTransaction {
    pub ticker: String,
    pub insider: String,
    pub title: Option<String>,
    /// `buy` or `sell` as reported on the form.
    pub transaction_type: String,
    pub shares: i64,
    pub price: Option<f64>,
    pub transaction_date: NaiveDate,
}
