//! Pure reducers from a ledger slice to period-bounded totals and rankings.

use bolso_domain::{sum_amounts, Category, Ledger, Transaction};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{period::PeriodWindow, time::days_remaining_in_month};

/// Totals and derived ratios for one ledger snapshot over one window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub total_fixed: f64,
    pub total_variable: f64,
    pub total_spent: f64,
    /// Signed; callers clamp to zero for the user-facing "available" figure
    /// but insight logic needs the raw value.
    pub remaining: f64,
    /// Spent as a percentage of salary; `None` when the baseline is absent.
    pub budget_utilization: Option<f64>,
    /// Spendable per day until month end. Always anchored to the real current
    /// month, even when a quarter or year window is being summarized.
    pub daily_allowance: Option<f64>,
    pub days_remaining: u32,
    pub transaction_count: usize,
}

/// Transactions whose date falls inside the window, both ends inclusive.
pub fn filter_window(transactions: &[Transaction], window: &PeriodWindow) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| window.contains(txn.date))
        .cloned()
        .collect()
}

/// Reduces a ledger snapshot to a [`Summary`] for the given window.
///
/// `today` is the real current date and only drives the daily allowance; the
/// window decides which transactions count.
pub fn summarize(ledger: &Ledger, window: &PeriodWindow, today: NaiveDate) -> Summary {
    let salary = ledger.profile.salary;
    let in_window = filter_window(&ledger.transactions, window);

    let total_fixed = sum_amounts(&ledger.profile.fixed_expenses);
    let total_variable = sum_amounts(&in_window);
    let total_spent = total_fixed + total_variable;
    let remaining = salary - total_spent;
    let days_remaining = days_remaining_in_month(today);

    let has_baseline = salary > 0.0;
    Summary {
        total_fixed,
        total_variable,
        total_spent,
        remaining,
        budget_utilization: has_baseline.then(|| total_spent / salary * 100.0),
        daily_allowance: has_baseline.then(|| remaining / f64::from(days_remaining)),
        days_remaining,
        transaction_count: in_window.len(),
    }
}

/// Summed amount per category, in first-seen order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

/// Folds a transaction slice into per-category sums. The order of the result
/// is the order categories first appear in the input.
pub fn category_summary(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for txn in transactions {
        match totals
            .iter_mut()
            .find(|entry| entry.category == txn.category)
        {
            Some(entry) => entry.total += txn.amount,
            None => totals.push(CategoryTotal {
                category: txn.category,
                total: txn.amount,
            }),
        }
    }
    totals
}

/// Stable descending ranking; ties keep first-seen insertion order.
pub fn top_categories(totals: &[CategoryTotal], n: usize) -> Vec<CategoryTotal> {
    let mut ranked = totals.to_vec();
    ranked.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::{resolve_period, PeriodKind};
    use bolso_domain::{FixedExpense, UserProfile};
    use chrono::{Duration, NaiveDateTime};

    fn instant(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn txn(description: &str, amount: f64, date: NaiveDateTime, category: Category) -> Transaction {
        Transaction::new(description, amount, date, category)
    }

    fn ledger_with(salary: f64, fixed: Vec<FixedExpense>, transactions: Vec<Transaction>) -> Ledger {
        let mut profile = UserProfile::new("Ana", salary);
        profile.fixed_expenses = fixed;
        Ledger::from_parts(profile, transactions, Vec::new())
    }

    #[test]
    fn window_filter_is_inclusive_at_end_and_excludes_after() {
        let now = instant(2025, 6, 15, 12);
        let window = resolve_period(PeriodKind::Month, now);
        let at_end = txn("na borda", 50.0, now, Category::Outro);
        let after_end = txn(
            "depois",
            70.0,
            now + Duration::microseconds(1),
            Category::Outro,
        );
        let ledger = ledger_with(1000.0, Vec::new(), vec![at_end, after_end]);

        let summary = summarize(&ledger, &window, now.date());
        assert_eq!(summary.total_variable, 50.0);
        assert_eq!(summary.transaction_count, 1);
    }

    #[test]
    fn remaining_is_salary_minus_fixed_and_variable() {
        let now = instant(2025, 6, 10, 9);
        let window = resolve_period(PeriodKind::Month, now);
        let ledger = ledger_with(
            2500.0,
            vec![
                FixedExpense::new("Aluguel", 900.0),
                FixedExpense::new("Internet", 100.0),
            ],
            vec![txn("Mercado", 321.25, instant(2025, 6, 3, 10), Category::Compras)],
        );

        let summary = summarize(&ledger, &window, now.date());
        assert_eq!(summary.total_fixed, 1000.0);
        assert_eq!(summary.total_variable, 321.25);
        assert_eq!(summary.remaining, 2500.0 - 1000.0 - 321.25);
    }

    #[test]
    fn zero_salary_yields_undefined_ratios_not_values() {
        let now = instant(2025, 6, 10, 9);
        let window = resolve_period(PeriodKind::Month, now);
        let ledger = ledger_with(
            0.0,
            Vec::new(),
            vec![txn("Café", 10.0, instant(2025, 6, 2, 8), Category::Alimentacao)],
        );

        let summary = summarize(&ledger, &window, now.date());
        assert_eq!(summary.budget_utilization, None);
        assert_eq!(summary.daily_allowance, None);
        assert_eq!(summary.remaining, -10.0);
    }

    #[test]
    fn daily_allowance_is_anchored_to_the_real_month() {
        // Summarizing the year window must not change the monthly anchor.
        let now = instant(2025, 6, 16, 12);
        let window = resolve_period(PeriodKind::Year, now);
        let ledger = ledger_with(3000.0, Vec::new(), Vec::new());

        let summary = summarize(&ledger, &window, now.date());
        assert_eq!(summary.days_remaining, 15);
        let allowance = summary.daily_allowance.unwrap();
        assert!((allowance - 3000.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn empty_ledger_summarizes_to_zeroes() {
        let now = instant(2025, 6, 10, 9);
        let window = resolve_period(PeriodKind::Month, now);
        let ledger = ledger_with(2000.0, Vec::new(), Vec::new());

        let summary = summarize(&ledger, &window, now.date());
        assert_eq!(summary.total_spent, 0.0);
        assert_eq!(summary.budget_utilization, Some(0.0));
        assert_eq!(summary.transaction_count, 0);
    }

    #[test]
    fn zero_transactions_leave_only_fixed_spending() {
        let now = instant(2025, 6, 10, 9);
        let window = resolve_period(PeriodKind::Month, now);
        let ledger = ledger_with(2000.0, vec![FixedExpense::new("Aluguel", 800.0)], Vec::new());

        let summary = summarize(&ledger, &window, now.date());
        assert_eq!(summary.total_variable, 0.0);
        assert_eq!(summary.total_spent, summary.total_fixed);
        assert_eq!(summary.total_spent, 800.0);
    }

    #[test]
    fn category_ranking_is_stable_on_ties() {
        let date = instant(2025, 6, 5, 10);
        let transactions = vec![
            txn("b1", 300.0, date, Category::Lazer),
            txn("a1", 300.0, date, Category::Compras),
            txn("c1", 100.0, date, Category::Casa),
        ];
        let totals = category_summary(&transactions);
        let top = top_categories(&totals, 2);
        assert_eq!(top[0].category, Category::Lazer);
        assert_eq!(top[1].category, Category::Compras);
    }

    #[test]
    fn category_summary_accumulates_per_category() {
        let date = instant(2025, 6, 5, 10);
        let transactions = vec![
            txn("feira", 40.0, date, Category::Alimentacao),
            txn("padaria", 10.0, date, Category::Alimentacao),
            txn("uber", 25.0, date, Category::Transporte),
        ];
        let totals = category_summary(&transactions);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, Category::Alimentacao);
        assert_eq!(totals[0].total, 50.0);
    }

    #[test]
    fn scenario_salary_3000_with_rent_and_groceries() {
        let now = instant(2025, 6, 10, 9);
        let window = resolve_period(PeriodKind::Month, now);
        let ledger = ledger_with(
            3000.0,
            vec![FixedExpense::new("Aluguel", 1000.0)],
            vec![txn("Feira", 200.0, now, Category::Alimentacao)],
        );

        let summary = summarize(&ledger, &window, now.date());
        assert_eq!(summary.total_spent, 1200.0);
        assert_eq!(summary.remaining, 1800.0);
        assert_eq!(summary.budget_utilization, Some(40.0));
    }
}
