//! Cumulative and comparative spending series for the statistics charts.

use bolso_domain::Transaction;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    format::month_label,
    period::{PeriodKind, PeriodWindow},
    time::shift_month,
};

/// One point of a cumulative spending curve.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// One bucket of the budget-versus-actual comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparativePoint {
    pub label: String,
    /// Non-cumulative spend inside the bucket.
    pub actual: f64,
    /// Salary scaled by the bucket length.
    pub target: f64,
}

impl ComparativePoint {
    pub fn within_budget(&self) -> bool {
        self.actual <= self.target
    }
}

/// Builds the running-total curve for the window: daily points for a month,
/// 7-day buckets for a quarter, twelve calendar months for a year.
///
/// The running total restarts at `window.start`; zero transactions yield
/// all-zero points, never an error.
pub fn cumulative_series(
    transactions: &[Transaction],
    window: &PeriodWindow,
    kind: PeriodKind,
) -> Vec<SeriesPoint> {
    let in_window: Vec<&Transaction> = transactions
        .iter()
        .filter(|txn| window.contains(txn.date))
        .collect();

    match kind {
        PeriodKind::Month => daily_points(&in_window, window),
        PeriodKind::Quarter => weekly_points(&in_window, window),
        PeriodKind::Year => monthly_points(&in_window, window),
    }
}

fn daily_points(in_window: &[&Transaction], window: &PeriodWindow) -> Vec<SeriesPoint> {
    let mut points = Vec::new();
    let mut day = window.start.date();
    let last = window.end.date();
    while day <= last {
        let value = in_window
            .iter()
            .filter(|txn| txn.date.date() <= day)
            .map(|txn| txn.amount)
            .sum();
        points.push(SeriesPoint {
            label: day.day().to_string(),
            value,
        });
        day += Duration::days(1);
    }
    points
}

fn weekly_points(in_window: &[&Transaction], window: &PeriodWindow) -> Vec<SeriesPoint> {
    let mut points = Vec::new();
    let mut bucket_start = window.start.date();
    let last = window.end.date();
    let mut running = 0.0;
    let mut week = 1usize;
    while bucket_start <= last {
        // the final bucket is clamped to the window end
        let bucket_end = (bucket_start + Duration::days(6)).min(last);
        running += in_window
            .iter()
            .filter(|txn| {
                let date = txn.date.date();
                date >= bucket_start && date <= bucket_end
            })
            .map(|txn| txn.amount)
            .sum::<f64>();
        points.push(SeriesPoint {
            label: format!("S{week}"),
            value: running,
        });
        bucket_start += Duration::days(7);
        week += 1;
    }
    points
}

fn monthly_points(in_window: &[&Transaction], window: &PeriodWindow) -> Vec<SeriesPoint> {
    let year = window.start.date().year();
    let mut points = Vec::with_capacity(12);
    let mut running = 0.0;
    for month in 1..=12 {
        running += in_window
            .iter()
            .filter(|txn| {
                let date = txn.date.date();
                date.year() == year && date.month() == month
            })
            .map(|txn| txn.amount)
            .sum::<f64>();
        points.push(SeriesPoint {
            label: month_label(month),
            value: running,
        });
    }
    points
}

/// Builds the fixed-length budget-versus-actual history, anchored to `today`
/// regardless of any active window: six months, four quarters, or three
/// years, oldest first.
pub fn comparative_series(
    transactions: &[Transaction],
    salary: f64,
    kind: PeriodKind,
    today: NaiveDate,
) -> Vec<ComparativePoint> {
    match kind {
        PeriodKind::Month => {
            let anchor = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap();
            (0..6)
                .rev()
                .map(|offset| {
                    let month_start = shift_month(anchor, -offset);
                    let actual = transactions
                        .iter()
                        .filter(|txn| {
                            let date = txn.date.date();
                            date.year() == month_start.year()
                                && date.month() == month_start.month()
                        })
                        .map(|txn| txn.amount)
                        .sum();
                    ComparativePoint {
                        label: month_label(month_start.month()),
                        actual,
                        target: salary,
                    }
                })
                .collect()
        }
        PeriodKind::Quarter => {
            let quarter_month = (today.month0() / 3) * 3 + 1;
            let anchor = NaiveDate::from_ymd_opt(today.year(), quarter_month, 1).unwrap();
            (0..4)
                .rev()
                .map(|offset| {
                    let start = shift_month(anchor, -offset * 3);
                    let end = shift_month(start, 3) - Duration::days(1);
                    let actual = transactions
                        .iter()
                        .filter(|txn| {
                            let date = txn.date.date();
                            date >= start && date <= end
                        })
                        .map(|txn| txn.amount)
                        .sum();
                    let quarter = start.month0() / 3 + 1;
                    ComparativePoint {
                        label: format!("Q{}/{:02}", quarter, start.year().rem_euclid(100)),
                        actual,
                        target: salary * 3.0,
                    }
                })
                .collect()
        }
        PeriodKind::Year => (0..3)
            .rev()
            .map(|offset| {
                let year = today.year() - offset;
                let actual = transactions
                    .iter()
                    .filter(|txn| txn.date.date().year() == year)
                    .map(|txn| txn.amount)
                    .sum();
                ComparativePoint {
                    label: year.to_string(),
                    actual,
                    target: salary * 12.0,
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::resolve_period;
    use bolso_domain::Category;
    use chrono::NaiveDateTime;

    fn instant(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn txn(amount: f64, date: NaiveDateTime) -> Transaction {
        Transaction::new("gasto", amount, date, Category::Outro)
    }

    #[test]
    fn month_series_has_one_point_per_day_and_is_cumulative() {
        let now = instant(2025, 6, 5);
        let window = resolve_period(PeriodKind::Month, now);
        let transactions = vec![txn(30.0, instant(2025, 6, 2)), txn(20.0, instant(2025, 6, 4))];

        let points = cumulative_series(&transactions, &window, PeriodKind::Month);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0].value, 0.0);
        assert_eq!(points[1].value, 30.0);
        assert_eq!(points[3].value, 50.0);
        assert_eq!(points[4].value, 50.0);
        assert_eq!(points[0].label, "1");
    }

    #[test]
    fn cumulative_series_is_monotonic_and_ends_at_the_window_total() {
        let now = instant(2025, 6, 20);
        let window = resolve_period(PeriodKind::Quarter, now);
        let transactions = vec![
            txn(100.0, instant(2025, 4, 3)),
            txn(50.0, instant(2025, 5, 15)),
            txn(25.0, instant(2025, 6, 19)),
        ];

        let points = cumulative_series(&transactions, &window, PeriodKind::Quarter);
        for pair in points.windows(2) {
            assert!(pair[1].value >= pair[0].value);
        }
        assert_eq!(points.last().unwrap().value, 175.0);
        assert_eq!(points[0].label, "S1");
    }

    #[test]
    fn year_series_always_has_twelve_buckets() {
        let now = instant(2025, 3, 10);
        let window = resolve_period(PeriodKind::Year, now);
        let points = cumulative_series(&[], &window, PeriodKind::Year);
        assert_eq!(points.len(), 12);
        assert!(points.iter().all(|point| point.value == 0.0));
        assert_eq!(points[0].label, "Jan");
        assert_eq!(points[11].label, "Dez");
    }

    #[test]
    fn comparative_series_is_fixed_length_even_when_empty() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(
            comparative_series(&[], 2000.0, PeriodKind::Month, today).len(),
            6
        );
        assert_eq!(
            comparative_series(&[], 2000.0, PeriodKind::Quarter, today).len(),
            4
        );
        assert_eq!(
            comparative_series(&[], 2000.0, PeriodKind::Year, today).len(),
            3
        );
    }

    #[test]
    fn comparative_month_points_scale_target_by_one_salary() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let transactions = vec![txn(120.0, instant(2025, 5, 10)), txn(80.0, instant(2025, 6, 1))];

        let points = comparative_series(&transactions, 2000.0, PeriodKind::Month, today);
        assert_eq!(points[4].label, "Mai");
        assert_eq!(points[4].actual, 120.0);
        assert_eq!(points[5].actual, 80.0);
        assert!(points.iter().all(|point| point.target == 2000.0));
        assert!(points[5].within_budget());
    }

    #[test]
    fn comparative_quarters_decrement_the_year_across_january() {
        // Reference in Q1/2025: buckets must be Q2/24, Q3/24, Q4/24, Q1/25.
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let transactions = vec![
            txn(500.0, instant(2024, 11, 10)),
            txn(200.0, instant(2025, 1, 5)),
        ];

        let points = comparative_series(&transactions, 1000.0, PeriodKind::Quarter, today);
        let labels: Vec<&str> = points.iter().map(|point| point.label.as_str()).collect();
        assert_eq!(labels, vec!["Q2/24", "Q3/24", "Q4/24", "Q1/25"]);
        assert_eq!(points[2].actual, 500.0);
        assert_eq!(points[3].actual, 200.0);
        assert!(points.iter().all(|point| point.target == 3000.0));
    }

    #[test]
    fn comparative_quarters_in_december_stay_in_the_current_year() {
        let today = NaiveDate::from_ymd_opt(2025, 12, 20).unwrap();
        let points = comparative_series(&[], 1000.0, PeriodKind::Quarter, today);
        let labels: Vec<&str> = points.iter().map(|point| point.label.as_str()).collect();
        assert_eq!(labels, vec!["Q1/25", "Q2/25", "Q3/25", "Q4/25"]);
    }

    #[test]
    fn comparative_years_span_three_calendar_years() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let transactions = vec![txn(900.0, instant(2023, 2, 1)), txn(300.0, instant(2025, 3, 1))];

        let points = comparative_series(&transactions, 1000.0, PeriodKind::Year, today);
        assert_eq!(points[0].label, "2023");
        assert_eq!(points[0].actual, 900.0);
        assert_eq!(points[2].actual, 300.0);
        assert!(points.iter().all(|point| point.target == 12_000.0));
    }
}
