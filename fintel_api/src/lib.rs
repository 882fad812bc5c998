//! Typed client for the fintel analytics service.
//!
//! [`Client`] exposes one async method per remote resource (daily digest,
//! per-ticker data, market events). Transport settings live in an immutable
//! [`ClientConfig`] established once at startup.

mod client;
mod config;
mod errors;
mod query;
pub mod types;
pub mod validation;
pub use self::client::Client;
pub use self::config::{ClientConfig, API_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::Error;
pub use self::query::{
    DateFiltered, DateRange, DigestHistoryQuery, DigestQuery, EarningsQuery, EmptyQuery,
    FilingsQuery, InsiderTradingQuery, Interval, MacroEventsQuery, NewsQuery, Query,
    RecentFilingsQuery, StockHistoryQuery, DEFAULT_HISTORY_LIMIT, DEFAULT_INSIDER_DAYS,
    DEFAULT_NEWS_LIMIT, DEFAULT_RECENT_FILINGS_DAYS,
};
