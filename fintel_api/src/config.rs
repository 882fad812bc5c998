//! Transport configuration shared by every request.

use std::time::Duration;

use url::Url;

use crate::Error;

/// Environment variable holding the service base address.
pub const API_URL_ENV: &str = "FINTEL_API_URL";
/// Base address used when [`API_URL_ENV`] is unset or blank.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Immutable settings captured by [`Client::new`](crate::Client::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Reads the base address from `FINTEL_API_URL`, falling back to the local default.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] against an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(API_URL_ENV) {
            Some(url) if !url.trim().is_empty() => Self::default().with_base_url(&url),
            _ => Ok(Self::default()),
        }
    }

    /// Replaces the base address. Must be an absolute http(s) URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, Error> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Base address without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

fn default_user_agent() -> String {
    format!("fintel/{}", env!("CARGO_PKG_VERSION"))
}

fn normalize_base_url(input: &str) -> Result<String, Error> {
    let trimmed = input.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed)
        .map_err(|e| Error::InvalidBaseUrl(format!("'{}': {}", trimmed, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::InvalidBaseUrl(format!(
            "'{}': scheme must be http or https",
            trimmed
        )));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(Error::InvalidBaseUrl(format!(
            "'{}': must not carry a query or fragment",
            trimmed
        )));
    }
    Ok(trimmed.to_string())
}
