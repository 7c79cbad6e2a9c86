use chrono::{Datelike, NaiveDate};

/// Month names indexed by zero-based month (0 = January).
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Short day names for the calendar grid header, Sunday first.
pub const DAY_NAMES_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Month name from a zero-based month index.
pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES.get(month0 as usize).copied().unwrap_or("")
}

fn first_of_month(year: i32, month0: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month0.checked_add(1)?, 1)
}

/// Number of days in the given month, or None if the month is out of range.
pub fn days_in_month(year: i32, month0: u32) -> Option<u32> {
    let first = first_of_month(year, month0)?;
    let next = if month0 == 11 {
        first_of_month(year + 1, 0)?
    } else {
        first_of_month(year, month0 + 1)?
    };
    Some((next - first).num_days() as u32)
}

/// Column of the month's first day in a Sunday-first grid (0 = Sunday).
pub fn first_weekday_index(year: i32, month0: u32) -> Option<u32> {
    first_of_month(year, month0).map(|d| d.weekday().num_days_from_sunday())
}

/// Format a calendar date as "YYYY-MM-DD" from a zero-based month and a
/// day-of-month. Returns None when the combination is not a real date, so
/// callers abort instead of sending a nonsense date to the backend.
pub fn iso_date(year: i32, month0: u32, day: u32) -> Option<String> {
    let date = NaiveDate::from_ymd_opt(year, month0.checked_add(1)?, day)?;
    Some(date.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(0), "January");
        assert_eq!(month_name(2), "March");
        assert_eq!(month_name(11), "December");
        assert_eq!(month_name(12), "");
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 0), Some(31));
        assert_eq!(days_in_month(2024, 3), Some(30));
        assert_eq!(days_in_month(2024, 11), Some(31));
    }

    #[test]
    fn test_february_leap_years() {
        assert_eq!(days_in_month(2024, 1), Some(29));
        assert_eq!(days_in_month(2023, 1), Some(28));
        assert_eq!(days_in_month(2000, 1), Some(29));
        assert_eq!(days_in_month(1900, 1), Some(28));
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(days_in_month(2024, 12), None);
        assert_eq!(first_weekday_index(2024, 12), None);
    }

    #[test]
    fn test_first_weekday_index() {
        // March 2024 starts on a Friday, September 2024 on a Sunday.
        assert_eq!(first_weekday_index(2024, 2), Some(5));
        assert_eq!(first_weekday_index(2024, 8), Some(0));
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(iso_date(2024, 2, 15), Some("2024-03-15".to_string()));
        assert_eq!(iso_date(2025, 0, 3), Some("2025-01-03".to_string()));
    }

    #[test]
    fn test_iso_date_rejects_invalid() {
        assert_eq!(iso_date(2024, 1, 30), None);
        assert_eq!(iso_date(2024, 12, 1), None);
        assert_eq!(iso_date(2024, 3, 0), None);
        assert_eq!(iso_date(2023, 1, 29), None);
    }
}
