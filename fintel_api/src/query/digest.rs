use chrono::NaiveDate;
use url::Url;

use crate::{validation, Error};

use super::common::{format_date, Query};

/// Number of past digests requested when no limit is given.
pub const DEFAULT_HISTORY_LIMIT: u32 = 30;

/// Parameters for `/api/digest/today`. Without a date the service picks today.
#[derive(Clone, Debug, Default)]
pub struct DigestQuery {
    pub date: Option<NaiveDate>,
}

impl Query for DigestQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(date) = self.date {
            url.query_pairs_mut()
                .append_pair("digest_date", &format_date(date));
        }
        url
    }
}

impl DigestQuery {
    /// Requests the digest generated for a specific day.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Parameters for `/api/digest/history`.
#[derive(Clone, Debug)]
pub struct DigestHistoryQuery {
    pub limit: u32,
}

impl Default for DigestHistoryQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl Query for DigestHistoryQuery {
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

impl DigestHistoryQuery {
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}
