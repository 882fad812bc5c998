mod recommendation;
pub use self::recommendation::{round_to, Action, Recommendation};

mod digest;
pub use self::digest::{
    DailyDigest, DigestHistory, KeyEvent, MacroContext, MarketSummary, OvernightMoves,
    PerformanceReport, RecentPick, WatchListEntry,
};

mod stock;
pub use self::stock::{
    Fundamentals, NewsArticle, PriceBar, PriceBlock, StockDetails, StockFilings, StockHistory,
    StockNews, Technicals,
};

mod events;
pub use self::events::{
    EarningsCalendar, EarningsEvent, InsiderTrading, InsiderTransaction, MacroEvent, MacroEvents,
    RecentFilings, SecFiling,
};

mod health;
pub use self::health::{HealthStatus, ReadinessStatus};

pub(crate) mod timestamp;
pub use self::timestamp::parse_timestamp;
