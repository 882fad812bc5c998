use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::{validation, Error};

use super::common::{DateFiltered, DateRange, Query};

/// Number of news articles requested when no limit is given.
pub const DEFAULT_NEWS_LIMIT: u32 = 10;

/// Bar size for price history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interval {
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Interval::Daily => "1d",
            Interval::Weekly => "1wk",
            Interval::Monthly => "1mo",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1d" | "daily" => Ok(Interval::Daily),
            "1wk" | "weekly" => Ok(Interval::Weekly),
            "1mo" | "monthly" => Ok(Interval::Monthly),
            other => Err(Error::InvalidInput(format!(
                "unknown interval '{}'. Valid intervals: 1d, 1wk, 1mo",
                other
            ))),
        }
    }
}

/// Parameters for `/api/stocks/{ticker}/history`. All filters are optional.
#[derive(Clone, Debug, Default)]
pub struct StockHistoryQuery {
    pub dates: DateRange,
    pub interval: Option<Interval>,
}

impl Query for StockHistoryQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.dates.add_to_url(url);
        if let Some(interval) = self.interval {
            url.query_pairs_mut()
                .append_pair("interval", &interval.to_string());
        }
        url
    }

    fn validate(&self) -> Result<(), Error> {
        self.dates.validate()
    }
}

impl DateFiltered for StockHistoryQuery {
    fn get_date_range(&mut self) -> &mut DateRange {
        &mut self.dates
    }
}

impl StockHistoryQuery {
    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = Some(interval);
        self
    }
}

/// Parameters for `/api/stocks/{ticker}/news`.
#[derive(Clone, Debug)]
pub struct NewsQuery {
    pub limit: u32,
}

impl Default for NewsQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_NEWS_LIMIT,
        }
    }
}

impl Query for NewsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("limit", &self.limit.to_string());
        url
    }

    fn validate(&self) -> Result<(), Error> {
        validation::validate_limit(self.limit).map(|_| ())
    }
}

impl NewsQuery {
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// Parameters for `/api/stocks/{ticker}/filings`.
#[derive(Clone, Debug, Default)]
pub struct FilingsQuery {
    /// Form type filter, e.g. `8-K`, `10-K`, `10-Q`.
    pub filing_type: Option<String>,
}

impl Query for FilingsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(filing_type) = &self.filing_type {
            url.query_pairs_mut()
                .append_pair("filing_type", filing_type.trim());
        }
        url
    }

    fn validate(&self) -> Result<(), Error> {
        if let Some(filing_type) = &self.filing_type {
            validation::validate_filing_type(filing_type)?;
        }
        Ok(())
    }
}

impl FilingsQuery {
    pub fn with_filing_type(mut self, filing_type: &str) -> Self {
        self.filing_type = Some(filing_type.trim().to_string());
        self
    }
}
