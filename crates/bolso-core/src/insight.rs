//! Rule-ordered advisory messages derived from the current spending metrics.

use bolso_domain::Transaction;
use serde::{Deserialize, Serialize};

use crate::{
    aggregate::{category_summary, top_categories},
    format::format_brl,
};

/// Severity classes for advisory messages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InsightKind {
    Positive,
    Warning,
    Critical,
    Informational,
}

/// A short advisory derived from current spending metrics. Regenerated on
/// every render, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
}

impl Insight {
    fn new(kind: InsightKind, title: &str, description: String) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description,
        }
    }
}

/// Evaluates the fixed rule chain and returns the insights in rule order.
///
/// Rules append independently, except the utilization branches which are
/// mutually exclusive. When the salary baseline is absent the ratio rules are
/// skipped entirely (no-data semantics). The fallback insight is emitted iff
/// nothing else fired, so the result is never empty.
pub fn generate_insights(
    salary: f64,
    total_spent: f64,
    transactions: &[Transaction],
    days_remaining: u32,
) -> Vec<Insight> {
    let mut insights = Vec::new();
    let has_baseline = salary > 0.0;

    if has_baseline {
        let utilization = total_spent / salary * 100.0;
        if utilization < 50.0 && days_remaining > 10 {
            insights.push(Insight::new(
                InsightKind::Positive,
                "Excelente controle!",
                format!("Você gastou apenas {utilization:.0}% do seu orçamento. Continue assim!"),
            ));
        } else if utilization > 80.0 && days_remaining > 5 {
            insights.push(Insight::new(
                InsightKind::Warning,
                "Atenção ao ritmo",
                format!(
                    "Você já usou {utilization:.0}% do orçamento com {days_remaining} dias pela frente."
                ),
            ));
        } else if utilization > 95.0 {
            insights.push(Insight::new(
                InsightKind::Critical,
                "Orçamento quase esgotado",
                "Considere reduzir gastos não essenciais este mês.".to_string(),
            ));
        }
    }

    if has_baseline {
        let totals = category_summary(transactions);
        if let Some(top) = top_categories(&totals, 1).into_iter().next() {
            if top.total > salary * 0.3 {
                let share = top.total / salary * 100.0;
                insights.push(Insight::new(
                    InsightKind::Informational,
                    "Oportunidade de economia",
                    format!(
                        "{} representa {share:.0}% do seu salário. Considere otimizar esses gastos.",
                        top.category
                    ),
                ));
            }
        }
    }

    let variable_total: f64 = transactions.iter().map(|txn| txn.amount).sum();
    let elapsed_days = (30 - i64::from(days_remaining)).max(1);
    let average_daily = variable_total / elapsed_days as f64;
    if average_daily > 0.0 {
        let projected = average_daily * 30.0;
        if projected < salary * 0.8 {
            insights.push(Insight::new(
                InsightKind::Positive,
                "Projeção positiva",
                format!(
                    "No ritmo atual, você deve economizar {} este mês.",
                    format_brl(salary - projected)
                ),
            ));
        }
    }

    if insights.is_empty() {
        insights.push(Insight::new(
            InsightKind::Informational,
            "Adicione mais gastos",
            "Registre suas despesas para receber insights personalizados.".to_string(),
        ));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use bolso_domain::Category;
    use chrono::NaiveDate;

    fn txn(amount: f64, category: Category) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2025, 6, 5)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Transaction::new("gasto", amount, date, category)
    }

    #[test]
    fn low_utilization_early_in_the_month_is_praised() {
        // salary 3000, spent 1200 (40%), 20 days to go
        let transactions = vec![txn(200.0, Category::Alimentacao)];
        let insights = generate_insights(3000.0, 1200.0, &transactions, 20);
        assert_eq!(insights[0].kind, InsightKind::Positive);
        assert_eq!(insights[0].title, "Excelente controle!");
        assert!(insights[0].description.contains("40%"));
    }

    #[test]
    fn high_utilization_with_days_ahead_warns_about_pace() {
        let transactions = vec![txn(850.0, Category::Compras)];
        let insights = generate_insights(1000.0, 850.0, &transactions, 10);
        assert_eq!(insights[0].kind, InsightKind::Warning);
        assert!(insights[0].description.contains("10 dias"));
    }

    #[test]
    fn near_exhausted_budget_is_critical_and_concentration_fires_too() {
        // 96% spent with 3 days left: the pace warning needs > 5 days, so the
        // critical branch fires; Compras at 96% of salary also trips rule 2.
        let transactions = vec![txn(960.0, Category::Compras)];
        let insights = generate_insights(1000.0, 960.0, &transactions, 3);
        assert_eq!(insights.len(), 2);
        assert_eq!(insights[0].kind, InsightKind::Critical);
        assert_eq!(insights[1].kind, InsightKind::Informational);
        assert!(insights[1].description.contains("Compras"));
        assert!(insights[1].description.contains("96%"));
    }

    #[test]
    fn utilization_branches_are_mutually_exclusive() {
        let transactions = vec![txn(990.0, Category::Casa)];
        let insights = generate_insights(1000.0, 990.0, &transactions, 10);
        let critical = insights
            .iter()
            .filter(|insight| insight.kind == InsightKind::Critical)
            .count();
        assert_eq!(critical, 0, "pace warning must shadow the critical branch");
    }

    #[test]
    fn modest_pace_projects_monthly_savings() {
        // 10 days elapsed, 100 spent: projected 300 < 80% of 3000
        let transactions = vec![txn(100.0, Category::Lazer)];
        let insights = generate_insights(3000.0, 100.0, &transactions, 20);
        let projection = insights
            .iter()
            .find(|insight| insight.title == "Projeção positiva")
            .expect("projection insight");
        assert!(projection.description.contains("R$ 2700.00"));
    }

    #[test]
    fn fallback_fires_exactly_when_no_rule_applies() {
        // 8 days left: the praise branch needs > 10, nothing else applies.
        let insights = generate_insights(1000.0, 0.0, &[], 8);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, "Adicione mais gastos");

        // Once a rule fires, the fallback must not appear.
        let transactions = vec![txn(100.0, Category::Lazer)];
        let active = generate_insights(3000.0, 100.0, &transactions, 20);
        assert!(active
            .iter()
            .all(|insight| insight.title != "Adicione mais gastos"));
    }

    #[test]
    fn missing_salary_baseline_falls_back_instead_of_dividing() {
        let transactions = vec![txn(500.0, Category::Compras)];
        let insights = generate_insights(0.0, 500.0, &transactions, 20);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Informational);
    }
}
