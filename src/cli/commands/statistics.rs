//! Statistics screen: filtered summaries, evolution and comparison charts,
//! category ranking for the selected period.

use bolso_core::{
    category_summary, comparative_series, cumulative_series, filter_window, format::format_brl,
    resolve_period, summarize, top_categories, Clock, PeriodKind, SeriesPoint,
};

use crate::{
    app::AppState,
    cli::{forms, output},
    errors::AppError,
};

const PERIOD_KINDS: [PeriodKind; 3] = [PeriodKind::Month, PeriodKind::Quarter, PeriodKind::Year];

pub fn show(state: &AppState, clock: &dyn Clock) -> Result<(), AppError> {
    let ledger = state.require_ledger()?;
    let labels: Vec<&str> = PERIOD_KINDS.iter().map(PeriodKind::picker_label).collect();
    let kind = PERIOD_KINDS[forms::select("Período", &labels)?];

    let now = clock.now();
    let window = resolve_period(kind, now);
    let summary = summarize(ledger, &window, now.date());
    let filtered = filter_window(&ledger.transactions, &window);

    output::section("Estatísticas");
    match summary.budget_utilization {
        Some(utilization) => {
            output::key_value(
                "Gastos",
                &format!(
                    "{} ({utilization:.0}% do salário)",
                    format_brl(summary.total_spent)
                ),
            );
            output::key_value(
                "Disponível",
                &format!(
                    "{} ({:.0}% restante)",
                    format_brl(summary.remaining.max(0.0)),
                    100.0 - utilization
                ),
            );
        }
        None => {
            output::key_value("Gastos", &format_brl(summary.total_spent));
            output::key_value("Disponível", "Sem dados");
        }
    }
    output::info(&format!("Exibindo dados de {}", window.label));
    output::info(&format!(
        "{} transações neste período",
        summary.transaction_count
    ));

    output::section("Evolução no Período");
    render_cumulative(&cumulative_series(&ledger.transactions, &window, kind), kind);

    output::section("Comparativo de Períodos");
    let comparison = comparative_series(&ledger.transactions, ledger.profile.salary, kind, now.date());
    if comparison.iter().all(|point| point.actual == 0.0) {
        output::info("Dados insuficientes para comparação");
    } else {
        let scale = comparison
            .iter()
            .map(|point| point.actual.max(point.target))
            .fold(0.0, f64::max);
        for point in &comparison {
            let marker = if point.within_budget() {
                "✓ Dentro do orçamento"
            } else {
                "⚠ Acima do orçamento"
            };
            println!(
                "{:<8} {:>12}  {}  {}",
                point.label,
                format_brl(point.actual),
                output::scaled_bar(point.actual, scale, 24),
                marker
            );
        }
    }

    output::section("Categorias");
    let ranking = top_categories(&category_summary(&filtered), 4);
    if ranking.is_empty() {
        output::info("Nenhuma categoria neste período");
    }
    for entry in &ranking {
        let share = if summary.total_variable > 0.0 {
            entry.total / summary.total_variable * 100.0
        } else {
            0.0
        };
        println!(
            "{} {:<14} {:>12}  {}  {share:.0}% do total",
            entry.category.icon(),
            entry.category.label(),
            format_brl(entry.total),
            output::scaled_bar(entry.total, ranking[0].total, 20),
        );
    }
    Ok(())
}

/// Month curves carry up to 31 points; print every fifth day plus the last
/// so the table stays readable, mirroring the chart's sparse axis.
fn render_cumulative(series: &[SeriesPoint], kind: PeriodKind) {
    if series.is_empty() {
        output::info("Nenhum dado para exibir neste período");
        return;
    }
    let scale = series
        .iter()
        .map(|point| point.value)
        .fold(0.0, f64::max);
    let step = if kind == PeriodKind::Month { 5 } else { 1 };
    let last = series.len() - 1;
    for (index, point) in series.iter().enumerate() {
        if index % step != 0 && index != last {
            continue;
        }
        println!(
            "{:<6} {:>12}  {}",
            point.label,
            format_brl(point.value),
            output::scaled_bar(point.value, scale, 30)
        );
    }
}
