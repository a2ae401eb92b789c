//! Player field validation rules
//!
//! Each rule takes an optional value; an absent value never validates.

use crate::utils::time::utc_year;

pub const NAME_MAX_CHARS: usize = 12;
pub const TITLE_MAX_CHARS: usize = 30;
pub const EXPERIENCE_MAX: i64 = 10_000_000;
pub const BIRTH_YEAR_MIN: i32 = 2000;
pub const BIRTH_YEAR_MAX: i32 = 3000;

/// 1 to 12 characters
pub fn is_valid_name(name: Option<&str>) -> bool {
    name.is_some_and(|n| (1..=NAME_MAX_CHARS).contains(&n.chars().count()))
}

/// 1 to 30 characters
pub fn is_valid_title(title: Option<&str>) -> bool {
    title.is_some_and(|t| (1..=TITLE_MAX_CHARS).contains(&t.chars().count()))
}

/// 0 to 10,000,000 inclusive
pub fn is_valid_experience(experience: Option<i64>) -> bool {
    experience.is_some_and(|e| (0..=EXPERIENCE_MAX).contains(&e))
}

/// Epoch milliseconds whose UTC calendar year is 2000 to 3000
pub fn is_valid_birthday(birthday: Option<i64>) -> bool {
    birthday
        .and_then(utc_year)
        .is_some_and(|year| (BIRTH_YEAR_MIN..=BIRTH_YEAR_MAX).contains(&year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn millis(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> i64 {
        Utc.with_ymd_and_hms(y, m, d, h, min, s)
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn test_name_length() {
        assert!(is_valid_name(Some("A")));
        assert!(is_valid_name(Some("Twelve_chars")));
        assert!(!is_valid_name(Some("Thirteen_char")));
        assert!(!is_valid_name(Some("")));
        assert!(!is_valid_name(None));
    }

    #[test]
    fn test_name_counts_characters_not_bytes() {
        // 12 characters, 24 bytes
        assert!(is_valid_name(Some("ÄÖÜäöüÄÖÜäöü")));
    }

    #[test]
    fn test_title_length() {
        assert!(is_valid_title(Some(&"x".repeat(30))));
        assert!(!is_valid_title(Some(&"x".repeat(31))));
        assert!(!is_valid_title(Some("")));
        assert!(!is_valid_title(None));
    }

    #[test]
    fn test_experience_range() {
        assert!(is_valid_experience(Some(0)));
        assert!(is_valid_experience(Some(EXPERIENCE_MAX)));
        assert!(!is_valid_experience(Some(-1)));
        assert!(!is_valid_experience(Some(EXPERIENCE_MAX + 1)));
        assert!(!is_valid_experience(None));
    }

    #[test]
    fn test_birthday_year_range() {
        assert!(is_valid_birthday(Some(millis(2000, 1, 1, 0, 0, 0))));
        assert!(is_valid_birthday(Some(millis(3000, 12, 31, 23, 59, 59))));
        assert!(!is_valid_birthday(Some(millis(1999, 12, 31, 23, 59, 59))));
        assert!(!is_valid_birthday(Some(millis(3001, 1, 1, 0, 0, 0))));
        assert!(!is_valid_birthday(Some(-1)));
        assert!(!is_valid_birthday(Some(i64::MAX)));
        assert!(!is_valid_birthday(None));
    }
}
