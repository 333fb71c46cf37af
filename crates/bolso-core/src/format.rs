//! Shared pt-BR formatting so every consumer renders identical figures.

use chrono::NaiveDate;

const MONTHS_LONG: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const MONTHS_SHORT: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Long month name for a 1-based month number.
pub fn month_long(month: u32) -> &'static str {
    MONTHS_LONG[(month as usize - 1) % 12]
}

/// Short month name for a 1-based month number.
pub fn month_short(month: u32) -> &'static str {
    MONTHS_SHORT[(month as usize - 1) % 12]
}

/// Short month with its first letter upper-cased, for chart labels.
pub fn month_label(month: u32) -> String {
    let short = month_short(month);
    let mut chars = short.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Currency rendering used by the dashboard and the report alike, so their
/// figures agree digit for digit.
pub fn format_brl(value: f64) -> String {
    format!("R$ {:.2}", round2(value))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
