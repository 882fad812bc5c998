//! Input validation for request parameters. Runs before any request is sent.

use chrono::NaiveDate;

use crate::Error;

pub const MAX_TICKER_LENGTH: usize = 10;
pub const MAX_FILING_TYPE_LENGTH: usize = 20;
pub const MAX_DAYS: u32 = 3650;

/// Strip ASCII control characters (except space), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, Error> {
    if input.len() > max_len {
        return Err(Error::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(Error::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a ticker symbol: trimmed, non-empty, upper-cased, and limited to
/// the characters exchanges use in symbols (`BRK.B`, `^GSPC`, `EURUSD=X`).
pub fn validate_ticker(input: &str) -> Result<String, Error> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput("ticker must not be empty".to_string()));
    }
    if trimmed.len() > MAX_TICKER_LENGTH {
        return Err(Error::InvalidInput(format!(
            "ticker '{}' exceeds {} characters",
            trimmed, MAX_TICKER_LENGTH
        )));
    }
    if let Some(bad) = trimmed
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '=')))
    {
        return Err(Error::InvalidInput(format!(
            "ticker '{}' contains invalid character '{}'",
            trimmed, bad
        )));
    }
    Ok(trimmed.to_ascii_uppercase())
}

/// Validate a filing type filter such as `8-K` or `10-Q`. Surrounding
/// whitespace is trimmed. Any control character left after trimming is an error.
pub fn validate_filing_type(input: &str) -> Result<String, Error> {
    let trimmed = input.trim();
    if let Some(bad) = trimmed.chars().find(|c| c.is_control()) {
        return Err(Error::InvalidInput(format!(
            "filing type contains control character {:?}",
            bad
        )));
    }
    sanitize_text(trimmed, MAX_FILING_TYPE_LENGTH)
}

/// Validate a result limit: must be at least 1.
pub fn validate_limit(limit: u32) -> Result<u32, Error> {
    if limit == 0 {
        return Err(Error::InvalidInput(
            "limit must be a positive integer".to_string(),
        ));
    }
    Ok(limit)
}

/// Validate a lookback window: must be 1..=3650 (approx 10 years).
pub fn validate_days(days: u32) -> Result<u32, Error> {
    if !(1..=MAX_DAYS).contains(&days) {
        return Err(Error::InvalidInput(format!(
            "days must be between 1 and {}, got {}",
            MAX_DAYS, days
        )));
    }
    Ok(days)
}

/// Validate a YYYY-MM-DD date string.
pub fn validate_date(input: &str) -> Result<NaiveDate, Error> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        Error::InvalidInput(format!(
            "invalid date '{}'. Expected format: YYYY-MM-DD (e.g., 2024-11-15)",
            trimmed
        ))
    })
}

/// A date range is valid when either end is open or start <= end.
pub fn validate_date_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(), Error> {
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(Error::InvalidInput(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Ticker validation --

    #[test]
    fn ticker_uppercased() {
        assert_eq!(validate_ticker("nvda").unwrap(), "NVDA");
    }

    #[test]
    fn ticker_trimmed() {
        assert_eq!(validate_ticker("  AAPL ").unwrap(), "AAPL");
    }

    #[test]
    fn ticker_with_class_suffix() {
        assert_eq!(validate_ticker("brk.b").unwrap(), "BRK.B");
        assert_eq!(validate_ticker("^GSPC").unwrap(), "^GSPC");
    }

    #[test]
    fn ticker_empty() {
        assert!(validate_ticker("").is_err());
        assert!(validate_ticker("   ").is_err());
    }

    #[test]
    fn ticker_rejects_path_characters() {
        assert!(validate_ticker("AAPL/news").is_err());
        assert!(validate_ticker("A?B").is_err());
    }

    #[test]
    fn ticker_too_long() {
        assert!(validate_ticker("ABCDEFGHIJK").is_err());
    }

    // -- Numeric parameters --

    #[test]
    fn limit_zero_rejected() {
        assert!(validate_limit(0).is_err());
        assert_eq!(validate_limit(1).unwrap(), 1);
    }

    #[test]
    fn days_bounds() {
        assert!(validate_days(0).is_err());
        assert!(validate_days(3651).is_err());
        assert_eq!(validate_days(7).unwrap(), 7);
        assert_eq!(validate_days(3650).unwrap(), 3650);
    }

    // -- Text and dates --

    #[test]
    fn filing_type_sanitized() {
        assert_eq!(validate_filing_type(" 8-K\n").unwrap(), "8-K");
        assert!(validate_filing_type("\t").is_err());
        assert!(validate_filing_type("a very long filing type name").is_err());
    }

    #[test]
    fn filing_type_rejects_embedded_control_characters() {
        assert!(validate_filing_type("8\u{7}-K").is_err());
        assert!(validate_filing_type("10-\rQ").is_err());
    }

    #[test]
    fn date_valid() {
        let d = validate_date("2024-11-15").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 11, 15).unwrap());
    }

    #[test]
    fn date_invalid() {
        assert!(validate_date("15/11/2024").is_err());
        assert!(validate_date("2024-13-01").is_err());
    }

    #[test]
    fn date_range_order() {
        let a = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 11, 8).unwrap();
        assert!(validate_date_range(Some(a), Some(b)).is_ok());
        assert!(validate_date_range(Some(a), Some(a)).is_ok());
        assert!(validate_date_range(Some(b), Some(a)).is_err());
        assert!(validate_date_range(Some(b), None).is_ok());
        assert!(validate_date_range(None, None).is_ok());
    }
}
