mod common;
pub use self::common::{DateFiltered, DateRange, EmptyQuery, Query};

mod digest;
pub use self::digest::{DigestHistoryQuery, DigestQuery, DEFAULT_HISTORY_LIMIT};

mod stock;
pub use self::stock::{FilingsQuery, Interval, NewsQuery, StockHistoryQuery, DEFAULT_NEWS_LIMIT};

mod events;
pub use self::events::{
    EarningsQuery, InsiderTradingQuery, MacroEventsQuery, RecentFilingsQuery,
    DEFAULT_INSIDER_DAYS, DEFAULT_RECENT_FILINGS_DAYS,
};
