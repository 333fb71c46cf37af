use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::format::{month_long, month_short};

/// Reporting period kinds selectable from the statistics screens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PeriodKind {
    Month,
    Quarter,
    Year,
}

impl PeriodKind {
    /// Menu label shown in the period picker.
    pub fn picker_label(&self) -> &'static str {
        match self {
            PeriodKind::Month => "Este mês",
            PeriodKind::Quarter => "Trimestre",
            PeriodKind::Year => "Este ano",
        }
    }
}

/// A concrete "period to date" interval: `start` is the first instant of the
/// period and `end` is the reference instant, both inclusive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeriodWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub label: String,
}

impl PeriodWindow {
    /// True when `instant` falls within `[start, end]`, both ends inclusive.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// Whole days spanned by the window, rounded up, never less than one.
    pub fn days_spanned(&self) -> i64 {
        let seconds = (self.end - self.start).num_seconds();
        ((seconds + 86_399) / 86_400).max(1)
    }
}

/// Computes the window and human label for a period kind "to date".
pub fn resolve_period(kind: PeriodKind, now: NaiveDateTime) -> PeriodWindow {
    let today = now.date();
    let (start_day, label) = match kind {
        PeriodKind::Month => (
            first_of_month(today.year(), today.month()),
            format!("{} de {}", month_long(today.month()), today.year()),
        ),
        PeriodKind::Quarter => {
            let quarter_month = (today.month0() / 3) * 3 + 1;
            (
                first_of_month(today.year(), quarter_month),
                format!(
                    "{} - {} de {}",
                    month_short(quarter_month),
                    month_short(today.month()),
                    today.year()
                ),
            )
        }
        PeriodKind::Year => (
            first_of_month(today.year(), 1),
            format!("Ano {}", today.year()),
        ),
    };
    PeriodWindow {
        start: start_day.and_hms_opt(0, 0, 0).unwrap(),
        end: now,
        label,
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 30, 0)
            .unwrap()
    }

    #[test]
    fn month_window_starts_at_first_midnight_and_ends_now() {
        let now = instant(2025, 6, 18, 14);
        let window = resolve_period(PeriodKind::Month, now);
        let expected_start = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(window.start, expected_start);
        assert_eq!(window.end, now);
        assert_eq!(window.label, "junho de 2025");
    }

    #[test]
    fn quarter_window_aligns_to_three_month_blocks() {
        let window = resolve_period(PeriodKind::Quarter, instant(2025, 5, 10, 9));
        assert_eq!(window.start.date(), NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        assert_eq!(window.label, "abr - mai de 2025");

        let december = resolve_period(PeriodKind::Quarter, instant(2025, 12, 2, 9));
        assert_eq!(
            december.start.date(),
            NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()
        );
        assert_eq!(december.label, "out - dez de 2025");

        let january = resolve_period(PeriodKind::Quarter, instant(2026, 1, 2, 9));
        assert_eq!(
            january.start.date(),
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
    }

    #[test]
    fn year_window_is_labelled_ano() {
        let window = resolve_period(PeriodKind::Year, instant(2025, 3, 1, 8));
        assert_eq!(window.start.date(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(window.label, "Ano 2025");
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let window = resolve_period(PeriodKind::Month, instant(2025, 6, 18, 14));
        assert!(window.contains(window.start));
        assert!(window.contains(window.end));
        assert!(!window.contains(window.end + chrono::Duration::seconds(1)));
    }

    #[test]
    fn days_spanned_rounds_up_partial_days() {
        let window = resolve_period(PeriodKind::Month, instant(2025, 6, 15, 14));
        assert_eq!(window.days_spanned(), 15);
    }
}
