//! Colored terminal output helpers.

use bolso_core::{Insight, InsightKind};
use colored::Colorize;

pub fn banner() {
    println!("{}", "BOLSO — seu bolso sob controle".magenta().bold());
}

pub fn section(title: &str) {
    println!();
    println!("{}", format!("=== {title} ===").bold());
}

pub fn info(message: &str) {
    println!("{}", message.dimmed());
}

pub fn success(message: &str) {
    println!("{} {}", "[✓]".green(), message);
}

pub fn warn(message: &str) {
    println!("{} {}", "[!]".yellow(), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", "[x]".red(), message);
}

pub fn key_value(label: &str, value: &str) {
    println!("{:<24} {}", format!("{label}:"), value.bold());
}

pub fn insight_line(insight: &Insight) {
    let marker = match insight.kind {
        InsightKind::Positive => "●".green(),
        InsightKind::Warning => "●".yellow(),
        InsightKind::Critical => "●".red(),
        InsightKind::Informational => "●".blue(),
    };
    println!("{marker} {} — {}", insight.title.bold(), insight.description);
}

/// Renders `value` as a proportional bar against `max`.
pub fn scaled_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return " ".repeat(width);
    }
    let ratio = (value / max).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
