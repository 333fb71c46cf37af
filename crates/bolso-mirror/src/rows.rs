//! Wire rows for the four mirrored tables and their domain conversions.

use bolso_domain::{FixedExpense, Goal, Transaction, UserProfile};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::MirrorError;

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub salary: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ProfileRow {
    pub fn from_profile(user_id: &str, email: &str, profile: &UserProfile) -> Self {
        Self {
            id: Some(user_id.to_string()),
            name: profile.name.clone(),
            email: email.to_string(),
            salary: profile.salary,
            created_at: None,
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixedExpenseRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl FixedExpenseRow {
    pub fn from_expense(user_id: &str, expense: &FixedExpense) -> Self {
        Self {
            id: None,
            user_id: user_id.to_string(),
            name: expense.name.clone(),
            amount: expense.amount,
            created_at: None,
        }
    }

    pub fn into_expense(self) -> FixedExpense {
        FixedExpense::new(self.name, self.amount)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ExpenseRow {
    pub fn from_transaction(user_id: &str, txn: &Transaction) -> Self {
        Self {
            id: Some(txn.id.to_string()),
            user_id: user_id.to_string(),
            description: txn.description.clone(),
            amount: txn.amount,
            category: txn.category.label().to_string(),
            date: txn.date.format(DATE_TIME_FORMAT).to_string(),
            created_at: None,
        }
    }

    /// Materializes a local transaction; an unknown category is a decode
    /// error, never a silent fallback.
    pub fn into_transaction(self) -> Result<Transaction, MirrorError> {
        let category = self
            .category
            .parse()
            .map_err(|err| MirrorError::Decode(format!("{err}")))?;
        let date = parse_instant(&self.date)?;
        let id = row_uuid(self.id.as_deref());
        Ok(Transaction {
            id,
            description: self.description,
            amount: self.amount,
            date,
            category,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl GoalRow {
    pub fn from_goal(user_id: &str, goal: &Goal) -> Self {
        Self {
            id: Some(goal.id.to_string()),
            user_id: user_id.to_string(),
            name: goal.name.clone(),
            target_amount: goal.target_amount,
            current_amount: goal.current_amount,
            deadline: goal.deadline.format("%Y-%m-%d").to_string(),
            created_at: None,
        }
    }

    pub fn into_goal(self) -> Result<Goal, MirrorError> {
        let deadline = NaiveDate::parse_from_str(&self.deadline, "%Y-%m-%d")
            .map_err(|err| MirrorError::Decode(format!("deadline: {err}")))?;
        Ok(Goal {
            id: row_uuid(self.id.as_deref()),
            name: self.name,
            target_amount: self.target_amount,
            current_amount: self.current_amount,
            deadline,
        })
    }
}

/// Server ids are opaque strings; rows created by this client carry UUIDs,
/// anything else gets a fresh local id.
fn row_uuid(id: Option<&str>) -> Uuid {
    match id.map(Uuid::parse_str) {
        Some(Ok(parsed)) => parsed,
        other => {
            if other.is_some() {
                tracing::warn!("mirror row id is not a uuid; assigning a new one");
            }
            Uuid::new_v4()
        }
    }
}

fn parse_instant(raw: &str) -> Result<NaiveDateTime, MirrorError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.naive_local());
    }
    if let Ok(instant) = NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT) {
        return Ok(instant);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_hms_opt(0, 0, 0).unwrap())
        .map_err(|err| MirrorError::Decode(format!("date: {err}")))
}
