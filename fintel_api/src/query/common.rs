//! Shared query infrastructure: the [`Query`] trait, the [`DateRange`] filter
//! and the [`DateFiltered`] builder methods.

use chrono::NaiveDate;
use url::Url;

use crate::{validation, Error};

/// Trait implemented by all query builders. Provides URL serialization and
/// validation of the parameters before a request is sent.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Checks the parameters. Called by the client before any network activity.
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }
}

/// Query for endpoints that take no parameters.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyQuery;

impl Query for EmptyQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        url.clone()
    }
}

/// Optional `start_date` / `end_date` pair. Unset ends are not sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRange {
    /// Appends the set ends of the range as `YYYY-MM-DD`.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(start) = self.start_date {
            url.query_pairs_mut()
                .append_pair("start_date", &format_date(start));
        }
        if let Some(end) = self.end_date {
            url.query_pairs_mut()
                .append_pair("end_date", &format_date(end));
        }
        url
    }

    pub fn validate(&self) -> Result<(), Error> {
        validation::validate_date_range(self.start_date, self.end_date)
    }
}

/// Builder methods for queries that accept a [`DateRange`].
pub trait DateFiltered: Query {
    /// Returns a mutable reference to the date range fields.
    fn get_date_range(&mut self) -> &mut DateRange;

    /// Sets the first day of the range (inclusive).
    fn with_start_date(mut self, start_date: NaiveDate) -> Self
    where
        Self: Sized,
    {
        self.get_date_range().start_date = Some(start_date);
        self
    }

    /// Sets the last day of the range (inclusive).
    fn with_end_date(mut self, end_date: NaiveDate) -> Self
    where
        Self: Sized,
    {
        self.get_date_range().end_date = Some(end_date);
        self
    }
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
