use serde::{Deserialize, Serialize};

use crate::{
    common::{validate_amount, validate_text, Amounted},
    error::DomainError,
};

/// A recurring monthly charge not tied to any calendar date.
///
/// Fixed expenses have positional identity inside their owning list and are
/// replaced wholesale when edited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixedExpense {
    pub name: String,
    pub amount: f64,
}

impl FixedExpense {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_text("fixed expense name", &self.name)?;
        validate_amount(self.amount)
    }
}

impl Amounted for FixedExpense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// The user's identity and monthly budget baseline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub name: String,
    /// Monthly salary; the baseline for every percentage-based metric.
    pub salary: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub fixed_expenses: Vec<FixedExpense>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, salary: f64) -> Self {
        Self {
            name: name.into(),
            salary,
            profile_image: None,
            fixed_expenses: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_text("name", &self.name)?;
        validate_amount(self.salary)?;
        for expense in &self.fixed_expenses {
            expense.validate()?;
        }
        Ok(())
    }
}
