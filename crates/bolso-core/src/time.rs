//! Calendar helpers and the clock abstraction.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Clock abstracts access to "now" so screens and reports stay deterministic
/// in tests. Calendar math uses the user's local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();
    (first_of_next - Duration::days(1)).day()
}

/// Days left in the real calendar month, counting today.
pub fn days_remaining_in_month(today: NaiveDate) -> u32 {
    days_in_month(today) - today.day() + 1
}

/// Shifts a date by whole months, clamping the day to the target month.
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let anchor = NaiveDate::from_ymd_opt(year, month as u32, 1).unwrap();
    let day = date.day().min(days_in_month(anchor));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(date(2024, 2, 10)), 29);
        assert_eq!(days_in_month(date(2025, 2, 10)), 28);
        assert_eq!(days_in_month(date(2025, 12, 1)), 31);
    }

    #[test]
    fn days_remaining_counts_today() {
        assert_eq!(days_remaining_in_month(date(2025, 6, 1)), 30);
        assert_eq!(days_remaining_in_month(date(2025, 6, 30)), 1);
    }

    #[test]
    fn shift_month_wraps_across_year_boundaries() {
        assert_eq!(shift_month(date(2025, 1, 15), -3), date(2024, 10, 15));
        assert_eq!(shift_month(date(2025, 11, 15), 3), date(2026, 2, 15));
    }

    #[test]
    fn shift_month_clamps_the_day() {
        assert_eq!(shift_month(date(2025, 1, 31), 1), date(2025, 2, 28));
    }
}
