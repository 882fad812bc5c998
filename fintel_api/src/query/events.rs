use url::Url;

use crate::{validation, Error};

use super::common::{DateFiltered, DateRange, Query};

/// Lookback window for recent SEC filings when none is given.
pub const DEFAULT_RECENT_FILINGS_DAYS: u32 = 7;
/// Lookback window for insider trades when none is given.
pub const DEFAULT_INSIDER_DAYS: u32 = 30;

/// Parameters for `/api/events/earnings`.
#[derive(Clone, Debug, Default)]
pub struct EarningsQuery {
    pub dates: DateRange,
}

impl Query for EarningsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        self.dates.add_to_url(url)
    }

    fn validate(&self) -> Result<(), Error> {
        self.dates.validate()
    }
}

impl DateFiltered for EarningsQuery {
    fn get_date_range(&mut self) -> &mut DateRange {
        &mut self.dates
    }
}

/// Parameters for `/api/events/macro`.
#[derive(Clone, Debug, Default)]
pub struct MacroEventsQuery {
    pub dates: DateRange,
}

impl Query for MacroEventsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        self.dates.add_to_url(url)
    }

    fn validate(&self) -> Result<(), Error> {
        self.dates.validate()
    }
}

impl DateFiltered for MacroEventsQuery {
    fn get_date_range(&mut self) -> &mut DateRange {
        &mut self.dates
    }
}

/// Parameters for `/api/events/filings/recent`.
#[derive(Clone, Debug)]
pub struct RecentFilingsQuery {
    pub filing_type: Option<String>,
    pub days: u32,
}

impl Default for RecentFilingsQuery {
    fn default() -> Self {
        Self {
            filing_type: None,
            days: DEFAULT_RECENT_FILINGS_DAYS,
        }
    }
}

impl Query for RecentFilingsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(filing_type) = &self.filing_type {
            url.query_pairs_mut()
                .append_pair("filing_type", filing_type.trim());
        }
        url.query_pairs_mut()
            .append_pair("days", &self.days.to_string());
        url
    }

    fn validate(&self) -> Result<(), Error> {
        if let Some(filing_type) = &self.filing_type {
            validation::validate_filing_type(filing_type)?;
        }
        validation::validate_days(self.days).map(|_| ())
    }
}

impl RecentFilingsQuery {
    pub fn with_filing_type(mut self, filing_type: &str) -> Self {
        self.filing_type = Some(filing_type.trim().to_string());
        self
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }
}

/// Parameters for `/api/events/insider-trading`.
#[derive(Clone, Debug)]
pub struct InsiderTradingQuery {
    /// Restrict to one ticker. `None` returns activity across all tickers.
    pub ticker: Option<String>,
    pub days: u32,
}

impl Default for InsiderTradingQuery {
    fn default() -> Self {
        Self {
            ticker: None,
            days: DEFAULT_INSIDER_DAYS,
        }
    }
}

impl Query for InsiderTradingQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(ticker) = &self.ticker {
            url.query_pairs_mut()
                .append_pair("ticker", &ticker.trim().to_ascii_uppercase());
        }
        url.query_pairs_mut()
            .append_pair("days", &self.days.to_string());
        url
    }

    fn validate(&self) -> Result<(), Error> {
        if let Some(ticker) = &self.ticker {
            validation::validate_ticker(ticker)?;
        }
        validation::validate_days(self.days).map(|_| ())
    }
}

impl InsiderTradingQuery {
    pub fn with_ticker(mut self, ticker: &str) -> Self {
        self.ticker = Some(ticker.to_string());
        self
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }
}
