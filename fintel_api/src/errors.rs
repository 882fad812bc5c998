//! Error types for the API client.

/// Errors that can occur when making API requests.
///
/// Every failure is returned to the caller as-is. The client never retries.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request did not complete within the configured timeout.
    #[error("Request to {url} timed out")]
    Timeout { url: String },
    /// The request failed at the network level (DNS, connection refused, reset, ...).
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The service answered with a success status but the body did not match the expected shape.
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
    /// The requested resource does not exist (HTTP 404).
    #[error("Resource not found: {url}")]
    NotFound { url: String, body: String },
    /// The API returned a non-success status. The body is kept intact.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// Request parameters failed validation. Nothing was sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The configured base address is not a usable http(s) URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl Error {
    /// True when the request hit the configured timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// HTTP status returned by the service, if the failure carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::NotFound { .. } => Some(404),
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Extracts the `detail` message from an error payload shaped like
    /// `{"detail": "..."}`. Returns `None` for other failures or payloads.
    pub fn detail(&self) -> Option<String> {
        let body = match self {
            Error::NotFound { body, .. } | Error::HttpStatus { body, .. } => body,
            _ => return None,
        };
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        match value.get("detail")? {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            Error::Timeout {
                url: url.to_string(),
            }
        } else {
            Error::Transport(err)
        }
    }
}
