//! Approach time conversion
//!
//! Source data uses the compact `2015-Jan-01 12:00` form. Output uses
//! `2015-01-01 12:00`. Both are timezone-naive UTC at minute precision.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Format of approach times in close-approach source data
pub const SOURCE_TIME_FORMAT: &str = "%Y-%b-%d %H:%M";

/// Format of approach times in serialized results
pub const OUTPUT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Time conversion errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("Invalid approach time '{value}': {reason}")]
    InvalidFormat { value: String, reason: String },
}

/// Parses a source approach time such as `2015-Jan-01 12:00`.
pub fn parse_approach_time(value: &str) -> Result<NaiveDateTime, TimeError> {
    NaiveDateTime::parse_from_str(value.trim(), SOURCE_TIME_FORMAT).map_err(|e| {
        TimeError::InvalidFormat {
            value: value.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Formats an approach time for output, dropping seconds.
pub fn format_approach_time(time: &NaiveDateTime) -> String {
    time.format(OUTPUT_TIME_FORMAT).to_string()
}

/// Parses an output-formatted time back, used when re-reading written results.
pub fn parse_output_time(value: &str) -> Result<NaiveDateTime, TimeError> {
    NaiveDateTime::parse_from_str(value.trim(), OUTPUT_TIME_FORMAT).map_err(|e| {
        TimeError::InvalidFormat {
            value: value.to_string(),
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_source_time() {
        let t = parse_approach_time("2015-Jan-01 12:00").unwrap();
        assert_eq!(t.year(), 2015);
        assert_eq!(t.month(), 1);
        assert_eq!(t.day(), 1);
        assert_eq!(t.hour(), 12);
        assert_eq!(t.minute(), 0);
    }

    #[test]
    fn test_parse_rejects_numeric_month() {
        let err = parse_approach_time("2015-01-01 12:00").unwrap_err();
        assert!(err.to_string().contains("2015-01-01 12:00"));
    }

    #[test]
    fn test_format_minute_precision() {
        let t = parse_approach_time("1900-Dec-31 23:59").unwrap();
        assert_eq!(format_approach_time(&t), "1900-12-31 23:59");
    }

    #[test]
    fn test_output_format_reparses() {
        let t = parse_approach_time("2020-Feb-29 07:05").unwrap();
        let s = format_approach_time(&t);
        assert_eq!(parse_output_time(&s).unwrap(), t);
    }
}
