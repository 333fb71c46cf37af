//! Single-pass, page-break-aware composition of the financial report.
//!
//! The composer lays plain-text pages out with a vertical cursor: before each
//! block it checks the remaining space on the current page and breaks when
//! the block would not fit. A failed validation aborts the whole render; no
//! partial document is ever returned.

use bolso_domain::{sum_amounts, Goal, Transaction, UserProfile};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    aggregate::{category_summary, top_categories},
    error::CoreError,
    format::{format_brl, format_date},
    insight::generate_insights,
    period::PeriodWindow,
    time::days_remaining_in_month,
};

/// Printable width of a page, in characters.
pub const PAGE_WIDTH: usize = 78;
/// Body lines per page; the footer line is appended on top of these.
pub const PAGE_BODY_LINES: usize = 54;

const REPORT_TITLE: &str = "BOLSO";
const REPORT_SUBTITLE: &str = "Relatório Financeiro Completo";

/// A fully laid out report: fixed-size text pages in reading order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportDocument {
    /// Deterministic file name derived from the user and the report date.
    pub file_name: String,
    pub pages: Vec<ReportPage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportPage {
    pub lines: Vec<String>,
}

impl ReportDocument {
    /// Joins the pages with form feeds for plain-file output.
    pub fn render(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.lines.join("\n"))
            .collect::<Vec<_>>()
            .join("\n\u{c}\n")
    }
}

/// Composes the full report for one snapshot, or fails atomically.
pub fn compose_report(
    profile: &UserProfile,
    transactions: &[Transaction],
    goals: &[Goal],
    window: &PeriodWindow,
    today: NaiveDate,
) -> Result<ReportDocument, CoreError> {
    if profile.name.trim().is_empty() {
        return Err(CoreError::MissingReportField("name"));
    }
    if !(profile.salary > 0.0) {
        return Err(CoreError::UndefinedBudget);
    }

    let in_window: Vec<Transaction> = transactions
        .iter()
        .filter(|txn| window.contains(txn.date))
        .cloned()
        .collect();

    let total_fixed = sum_amounts(&profile.fixed_expenses);
    let total_variable = sum_amounts(&in_window);
    let total_spent = total_fixed + total_variable;
    let remaining = profile.salary - total_spent;
    let utilization = total_spent / profile.salary * 100.0;
    let daily_average = total_variable / window.days_spanned() as f64;
    let ranking = top_categories(&category_summary(&in_window), 5);
    let insights = generate_insights(
        profile.salary,
        total_spent,
        &in_window,
        days_remaining_in_month(today),
    );

    let mut layout = PageLayout::new();

    // header band
    layout.push("=".repeat(PAGE_WIDTH));
    layout.push(center(REPORT_TITLE));
    layout.push(center(REPORT_SUBTITLE));
    layout.push("=".repeat(PAGE_WIDTH));
    layout.blank();

    // user info
    section(&mut layout, "Informações do Usuário");
    layout.push(format!("Nome: {}", profile.name));
    layout.push(format!("Salário Mensal: {}", format_brl(profile.salary)));
    layout.push(format!("Período: {}", window.label));
    layout.push(format!("Data do Relatório: {}", format_date(today)));
    layout.blank();

    // financial summary
    layout.ensure_space(10);
    section(&mut layout, "Resumo Financeiro");
    layout.push(two_column(
        &format!("Total Gasto: {}", format_brl(total_spent)),
        &format!("Disponível: {}", format_brl(remaining.max(0.0))),
    ));
    layout.blank();
    layout.push(format!("Utilização do Orçamento: {utilization:.1}%"));
    layout.push(bar(utilization / 100.0, PAGE_WIDTH - 2));
    layout.push(format!("Status: {}", budget_status(utilization)));
    layout.blank();

    // expense breakdown
    layout.ensure_space(6);
    section(&mut layout, "Detalhamento de Gastos");
    layout.push("Contas Fixas:".to_string());
    for expense in &profile.fixed_expenses {
        layout.push(two_column(
            &format!("  - {}", expense.name),
            &format_brl(expense.amount),
        ));
    }
    layout.push(two_column("  Subtotal Fixo:", &format_brl(total_fixed)));
    layout.blank();
    layout.ensure_space(4);
    layout.push("Gastos Variáveis:".to_string());
    layout.push(format!("  Total: {}", format_brl(total_variable)));
    layout.push(format!("  Média diária: {}", format_brl(daily_average)));
    layout.push(format!("  Número de transações: {}", in_window.len()));
    layout.blank();

    // category ranking
    layout.ensure_space(5);
    section(&mut layout, "Análise por Categoria");
    if ranking.is_empty() {
        layout.push("Nenhuma categoria registrada neste período".to_string());
    } else {
        for (index, entry) in ranking.iter().enumerate() {
            layout.ensure_space(2);
            let share = if total_variable > 0.0 {
                entry.total / total_variable * 100.0
            } else {
                0.0
            };
            layout.push(two_column(
                &format!("{}. {}", index + 1, entry.category),
                &format!("{} ({share:.1}%)", format_brl(entry.total)),
            ));
            layout.push(format!("   {}", bar(share / 100.0, PAGE_WIDTH - 6)));
        }
    }
    layout.blank();

    // goals
    if !goals.is_empty() {
        layout.ensure_space(7);
        section(&mut layout, "Metas Financeiras");
        for goal in goals {
            layout.ensure_space(4);
            let progress = goal.progress_ratio();
            layout.push(goal.name.clone());
            layout.push(format!(
                "  Progresso: {} de {} ({:.0}%)",
                format_brl(goal.current_amount),
                format_brl(goal.target_amount),
                progress * 100.0
            ));
            let days_left = goal.days_left(today);
            layout.push(format!(
                "  Prazo: {}",
                if days_left > 0 {
                    format!("{days_left} dias restantes")
                } else {
                    "Vencido".to_string()
                }
            ));
            // the figure above stays unclamped; only the bar width clamps
            layout.push(format!("  {}", bar(progress, PAGE_WIDTH - 4)));
        }
        layout.blank();
    }

    // insights
    layout.ensure_space(4);
    section(&mut layout, "Insights e Recomendações");
    for insight in &insights {
        let text = format!("{}: {}", insight.title, insight.description);
        for (index, line) in wrap(&text, PAGE_WIDTH - 4).into_iter().enumerate() {
            let prefix = if index == 0 { "- " } else { "  " };
            layout.push(format!("{prefix}{line}"));
        }
    }

    // transaction history, always on a fresh page
    if !in_window.is_empty() {
        layout.fresh_page();
        section(&mut layout, "Histórico de Transações");
        let mut history = in_window.clone();
        history.sort_by(|a, b| b.date.cmp(&a.date));
        for txn in &history {
            layout.push(history_row(txn));
        }
    }

    let report_date = format_date(today);
    let pages = layout.into_pages(|page, total| {
        center(&format!(
            "Página {page} de {total} - Gerado por Bolso em {report_date}"
        ))
    });

    Ok(ReportDocument {
        file_name: report_file_name(&profile.name, today),
        pages,
    })
}

/// Status label used by the report summary block.
fn budget_status(utilization: f64) -> &'static str {
    if utilization < 50.0 {
        "Excelente controle!"
    } else if utilization < 75.0 {
        "No caminho certo"
    } else if utilization < 90.0 {
        "Atenção necessária"
    } else {
        "Orçamento crítico"
    }
}

fn report_file_name(name: &str, today: NaiveDate) -> String {
    let slug: String = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("bolso_relatorio_{}_{}.txt", slug, today.format("%Y-%m-%d"))
}

fn history_row(txn: &Transaction) -> String {
    let date = format_date(txn.date.date());
    let description = truncate(&txn.description, 32);
    let category = txn.category.label();
    let amount = format_brl(txn.amount);
    let left = format!("{date}  {description:<32}  {category:<12}");
    two_column(&left, &amount)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn width_of(text: &str) -> usize {
    text.chars().count()
}

fn center(text: &str) -> String {
    let width = width_of(text);
    if width >= PAGE_WIDTH {
        return text.to_string();
    }
    let pad = (PAGE_WIDTH - width) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

fn two_column(left: &str, right: &str) -> String {
    let used = width_of(left) + width_of(right);
    if used >= PAGE_WIDTH {
        return format!("{left} {right}");
    }
    format!("{}{}{}", left, " ".repeat(PAGE_WIDTH - used), right)
}

/// Proportional bar; the fill clamps to the available width.
fn bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if width_of(&current) + 1 + width_of(word) <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn section(layout: &mut PageLayout, title: &str) {
    layout.ensure_space(2);
    layout.push(title.to_string());
    layout.push("-".repeat(PAGE_WIDTH));
}

/// Vertical-cursor page builder.
struct PageLayout {
    done: Vec<Vec<String>>,
    current: Vec<String>,
}

impl PageLayout {
    fn new() -> Self {
        Self {
            done: Vec::new(),
            current: Vec::new(),
        }
    }

    fn remaining(&self) -> usize {
        PAGE_BODY_LINES.saturating_sub(self.current.len())
    }

    /// Breaks the page when fewer than `needed` lines remain on it.
    fn ensure_space(&mut self, needed: usize) {
        if self.remaining() < needed && !self.current.is_empty() {
            self.break_page();
        }
    }

    fn break_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        self.done.push(page);
    }

    /// Starts a new page unless the current one is still blank.
    fn fresh_page(&mut self) {
        if !self.current.is_empty() {
            self.break_page();
        }
    }

    fn push(&mut self, line: impl Into<String>) {
        self.ensure_space(1);
        self.current.push(line.into());
    }

    fn blank(&mut self) {
        if !self.current.is_empty() && self.remaining() > 0 {
            self.current.push(String::new());
        }
    }

    fn into_pages(mut self, footer: impl Fn(usize, usize) -> String) -> Vec<ReportPage> {
        if !self.current.is_empty() || self.done.is_empty() {
            self.break_page();
        }
        let total = self.done.len();
        self.done
            .into_iter()
            .enumerate()
            .map(|(index, mut lines)| {
                while lines.len() < PAGE_BODY_LINES {
                    lines.push(String::new());
                }
                lines.push(footer(index + 1, total));
                ReportPage { lines }
            })
            .collect()
    }
}
