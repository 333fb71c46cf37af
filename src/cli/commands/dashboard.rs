//! Home screen: available balance, daily allowance, insights, latest activity.

use bolso_core::{
    filter_window,
    format::{format_brl, format_date},
    generate_insights, resolve_period, summarize, Clock, PeriodKind,
};
use chrono::Timelike;

use crate::{app::AppState, cli::output, errors::AppError};

pub fn show(state: &AppState, clock: &dyn Clock) -> Result<(), AppError> {
    let ledger = state.require_ledger()?;
    let now = clock.now();
    let window = resolve_period(PeriodKind::Month, now);
    let summary = summarize(ledger, &window, now.date());
    let month_transactions = filter_window(&ledger.transactions, &window);

    output::section(&format!("{}, {}", greeting(now.hour()), ledger.profile.name));
    output::key_value("Seu Saldo Disponível", &format_brl(summary.remaining.max(0.0)));
    let days = summary.days_remaining;
    output::info(&format!(
        "{days} {} no mês",
        if days == 1 { "dia restante" } else { "dias restantes" }
    ));

    match summary.daily_allowance {
        Some(allowance) => output::key_value("Pode gastar hoje", &format_brl(allowance.max(0.0))),
        None => output::key_value("Pode gastar hoje", "--"),
    }
    match summary.budget_utilization {
        Some(utilization) => {
            output::key_value("Status", status_label(utilization));
            output::info(&format!("{utilization:.0}% gasto"));
        }
        None => output::key_value("Status", "Sem dados"),
    }

    output::section("Insights");
    let insights = generate_insights(
        ledger.profile.salary,
        summary.total_spent,
        &month_transactions,
        summary.days_remaining,
    );
    for insight in &insights {
        output::insight_line(insight);
    }

    output::section("Transações");
    if month_transactions.is_empty() {
        output::info("Nenhum gasto registrado neste mês.");
    }
    for txn in month_transactions.iter().take(10) {
        println!(
            "{}  {:<30} {:<12} {}",
            format_date(txn.date.date()),
            txn.description,
            txn.category.label(),
            format_brl(txn.amount)
        );
    }
    Ok(())
}

fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Bom dia"
    } else if hour < 18 {
        "Boa tarde"
    } else {
        "Boa noite"
    }
}

/// Status label used on the dashboard card; the report carries its own set.
fn status_label(utilization: f64) -> &'static str {
    if utilization < 50.0 {
        "Excelente"
    } else if utilization < 75.0 {
        "No controle"
    } else if utilization < 90.0 {
        "Atenção"
    } else {
        "Cuidado"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_follows_the_hour() {
        assert_eq!(greeting(8), "Bom dia");
        assert_eq!(greeting(14), "Boa tarde");
        assert_eq!(greeting(22), "Boa noite");
    }

    #[test]
    fn status_thresholds_match_the_card() {
        assert_eq!(status_label(49.9), "Excelente");
        assert_eq!(status_label(60.0), "No controle");
        assert_eq!(status_label(80.0), "Atenção");
        assert_eq!(status_label(95.0), "Cuidado");
    }
}
