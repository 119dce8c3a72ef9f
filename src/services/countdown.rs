//! Day arithmetic for holiday countdowns.

use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::constants::formats;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("time data '{input}' does not match format '{}'", formats::HOLIDAY_DATE)]
pub struct DateParseError {
    pub input: String,
}

pub fn parse_holiday_date(input: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(input, formats::HOLIDAY_DATE).map_err(|_| DateParseError {
        input: input.to_string(),
    })
}

/// Whole days from `today` to `date`. Negative once the date has passed.
///
/// `NaiveDate` covers roughly 2^28 days end to end, so the difference always
/// fits in an `i32`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i32 {
    (date - today).num_days() as i32
}

/// Current calendar date in the server's local time zone.
#[must_use]
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_holiday_date(s).unwrap()
    }

    #[test]
    fn test_days_until_future() {
        assert_eq!(days_until(date("2026-01-01"), date("2025-12-01")), 31);
    }

    #[test]
    fn test_days_until_today_is_zero() {
        assert_eq!(days_until(date("2025-07-04"), date("2025-07-04")), 0);
    }

    #[test]
    fn test_days_until_past_is_negative() {
        assert_eq!(days_until(date("2025-01-01"), date("2025-03-01")), -59);
    }

    #[test]
    fn test_days_until_spans_leap_day() {
        assert_eq!(days_until(date("2024-03-01"), date("2024-02-28")), 2);
    }

    #[test]
    fn test_days_until_extreme_dates() {
        let span = (NaiveDate::MAX - NaiveDate::MIN).num_days();
        assert_eq!(i64::from(days_until(NaiveDate::MAX, NaiveDate::MIN)), span);
        assert_eq!(i64::from(days_until(NaiveDate::MIN, NaiveDate::MAX)), -span);
    }

    #[test]
    fn test_parse_rejects_wrong_format() {
        for input in ["01/01/2026", "2026-13-01", "2026-02-30", "tomorrow", ""] {
            let err = parse_holiday_date(input).unwrap_err();
            assert_eq!(err.input, input);
        }
    }

    #[test]
    fn test_parse_error_message() {
        let err = parse_holiday_date("July 4th").unwrap_err();
        assert_eq!(
            err.to_string(),
            "time data 'July 4th' does not match format '%Y-%m-%d'"
        );
    }
}
