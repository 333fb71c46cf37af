//! Prompt helpers for interactive data entry.
//!
//! All entry-boundary validation happens here: amounts must be positive
//! finite numbers, required text must be non-empty, categories come from the
//! closed set. Nothing invalid reaches the ledger or the metrics engine.

use bolso_domain::Category;
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};

use crate::errors::AppError;

pub fn select(prompt: &str, items: &[&str]) -> Result<usize, AppError> {
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?;
    Ok(choice)
}

pub fn confirm(prompt: &str) -> Result<bool, AppError> {
    let answer = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(answer)
}

pub fn input_text(prompt: &str) -> Result<String, AppError> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("campo obrigatório")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

pub fn input_text_with_default(prompt: &str, default: &str) -> Result<String, AppError> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default.to_string())
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("campo obrigatório")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Optional free text; empty input yields `None`.
pub fn input_optional(prompt: &str) -> Result<Option<String>, AppError> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    let trimmed = value.trim();
    Ok(if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    })
}

pub fn input_password(prompt: &str) -> Result<String, AppError> {
    let value = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact()?;
    Ok(value)
}

pub fn input_amount(prompt: &str) -> Result<f64, AppError> {
    parse_amount(&amount_text(prompt, None)?)
}

pub fn input_amount_with_default(prompt: &str, default: f64) -> Result<f64, AppError> {
    parse_amount(&amount_text(prompt, Some(format!("{default:.2}")))?)
}

/// Non-negative amount, used for goal progress updates.
pub fn input_non_negative(prompt: &str) -> Result<f64, AppError> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), &str> {
            match normalized(input).parse::<f64>() {
                Ok(parsed) if parsed.is_finite() && parsed >= 0.0 => Ok(()),
                _ => Err("informe um valor maior ou igual a zero"),
            }
        })
        .interact_text()?;
    normalized(&value)
        .parse()
        .map_err(|_| AppError::InvalidArgs("invalid amount".into()))
}

pub fn input_date(prompt: &str, default: NaiveDate) -> Result<NaiveDate, AppError> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{prompt} (AAAA-MM-DD)"))
        .default(default.format("%Y-%m-%d").to_string())
        .validate_with(|input: &String| -> Result<(), &str> {
            NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
                .map(|_| ())
                .map_err(|_| "data inválida")
        })
        .interact_text()?;
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidArgs("invalid date".into()))
}

pub fn select_category(prompt: &str) -> Result<Category, AppError> {
    let labels: Vec<String> = Category::ALL
        .iter()
        .map(|category| format!("{} {}", category.icon(), category.label()))
        .collect();
    let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
    let index = select(prompt, &refs)?;
    Ok(Category::ALL[index])
}

fn amount_text(prompt: &str, default: Option<String>) -> Result<String, AppError> {
    let theme = ColorfulTheme::default();
    let mut input = Input::with_theme(&theme).with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default);
    }
    let value: String = input
        .validate_with(|input: &String| -> Result<(), &str> {
            match normalized(input).parse::<f64>() {
                Ok(parsed) if parsed.is_finite() && parsed > 0.0 => Ok(()),
                _ => Err("informe um valor positivo"),
            }
        })
        .interact_text()?;
    Ok(value)
}

fn parse_amount(raw: &str) -> Result<f64, AppError> {
    normalized(raw)
        .parse()
        .map_err(|_| AppError::InvalidArgs("invalid amount".into()))
}

/// Accepts a decimal comma as well as a decimal point.
fn normalized(raw: &str) -> String {
    raw.trim().replace(',', ".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_accepts_decimal_comma() {
        assert_eq!(normalized(" 12,50 "), "12.50");
        assert_eq!(parse_amount("12,50").unwrap(), 12.5);
    }
}
