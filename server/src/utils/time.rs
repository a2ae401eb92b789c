//! Time utility functions

use chrono::{DateTime, Datelike, Utc};

/// Milliseconds in one UTC calendar day
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Number of the UTC calendar day containing an epoch-millisecond timestamp.
///
/// Floors toward negative infinity so pre-1970 instants land on their own day.
pub fn day_number(millis: i64) -> i64 {
    millis.div_euclid(MILLIS_PER_DAY)
}

/// Convert epoch milliseconds to DateTime<Utc>, `None` when out of range
pub fn millis_to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// UTC calendar year of an epoch-millisecond timestamp
pub fn utc_year(millis: i64) -> Option<i32> {
    millis_to_datetime(millis).map(|dt| dt.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn millis(y: i32, m: u32, d: u32, h: u32, min: u32) -> i64 {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn test_day_number_ignores_time_of_day() {
        assert_eq!(
            day_number(millis(2005, 6, 1, 0, 0)),
            day_number(millis(2005, 6, 1, 23, 59))
        );
        assert_eq!(
            day_number(millis(2005, 6, 1, 23, 59)) + 1,
            day_number(millis(2005, 6, 2, 0, 0))
        );
    }

    #[test]
    fn test_day_number_before_epoch() {
        assert_eq!(day_number(0), 0);
        assert_eq!(day_number(-1), -1);
        assert_eq!(day_number(-MILLIS_PER_DAY), -1);
        assert_eq!(day_number(-MILLIS_PER_DAY - 1), -2);
    }

    #[test]
    fn test_utc_year() {
        assert_eq!(utc_year(millis(2000, 1, 1, 0, 0)), Some(2000));
        assert_eq!(utc_year(millis(1999, 12, 31, 23, 59)), Some(1999));
        assert_eq!(utc_year(i64::MAX), None);
    }

    #[test]
    fn test_millis_to_datetime() {
        let dt = millis_to_datetime(0).unwrap();
        assert_eq!(dt, DateTime::UNIX_EPOCH);
    }
}
