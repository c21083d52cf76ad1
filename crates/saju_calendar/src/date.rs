//! Birth date parsing.
//!
//! Accepts plain calendar dates in a few common separators as well as full
//! timestamps. For timestamps the calendar date is taken as written; no
//! timezone conversion is applied.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::CalendarError;

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%Y%m%d"];

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a raw birth date.
///
/// Fails fast with [`CalendarError::InvalidDate`]; nothing is defaulted.
pub fn parse_birth_date(raw: &str) -> Result<NaiveDate, CalendarError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(CalendarError::InvalidDate("empty".to_string()));
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }

    Err(CalendarError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn iso_date() {
        assert_eq!(parse_birth_date("2000-01-01").unwrap(), ymd(2000, 1, 1));
    }

    #[test]
    fn alternate_separators() {
        assert_eq!(parse_birth_date("1988/07/15").unwrap(), ymd(1988, 7, 15));
        assert_eq!(parse_birth_date("1988.07.15").unwrap(), ymd(1988, 7, 15));
        assert_eq!(parse_birth_date("19880715").unwrap(), ymd(1988, 7, 15));
    }

    #[test]
    fn surrounding_whitespace() {
        assert_eq!(parse_birth_date("  2024-02-04 ").unwrap(), ymd(2024, 2, 4));
    }

    #[test]
    fn timestamp_keeps_written_date() {
        // 23:30 at +09:00 is still the 3rd as written
        let d = parse_birth_date("1990-03-03T23:30:00+09:00").unwrap();
        assert_eq!(d, ymd(1990, 3, 3));
        let d = parse_birth_date("1990-03-03T23:30:00Z").unwrap();
        assert_eq!(d, ymd(1990, 3, 3));
        let d = parse_birth_date("1990-03-03 07:15").unwrap();
        assert_eq!(d, ymd(1990, 3, 3));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_birth_date("not a date"),
            Err(CalendarError::InvalidDate(_))
        ));
        assert!(parse_birth_date("").is_err());
    }

    #[test]
    fn rejects_impossible_day() {
        assert!(parse_birth_date("2023-02-29").is_err());
        assert!(parse_birth_date("2000-13-01").is_err());
    }

    #[test]
    fn accepts_leap_day() {
        assert_eq!(parse_birth_date("2024-02-29").unwrap(), ymd(2024, 2, 29));
    }
}
