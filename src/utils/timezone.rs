use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use thiserror::Error;

/// Error types for timezone operations
#[derive(Debug, Error)]
pub enum TimezoneError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

/// Parse a timezone string
pub fn parse_timezone(tz_str: &str) -> Result<Tz, TimezoneError> {
    tz_str
        .trim()
        .parse()
        .map_err(|_| TimezoneError::InvalidTimezone(tz_str.to_string()))
}

/// Current calendar date in the given timezone
pub fn today_in(timezone: &Tz) -> NaiveDate {
    Utc::now().with_timezone(timezone).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timezone() {
        assert!(parse_timezone("UTC").is_ok());
        assert!(parse_timezone("Europe/Kyiv").is_ok());
        assert!(parse_timezone(" America/New_York ").is_ok());
        assert!(parse_timezone("Invalid/Timezone").is_err());
    }

    #[test]
    fn test_timezone_error_message() {
        let err = parse_timezone("Mars/Olympus").unwrap_err();
        assert_eq!(err.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn test_today_in_is_close_to_utc() {
        let utc_today = Utc::now().date_naive();
        let tz = parse_timezone("Pacific/Kiritimati").unwrap();
        let days = (today_in(&tz) - utc_today).num_days();
        assert!((-1..=1).contains(&days));
    }
}
