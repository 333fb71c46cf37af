use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    common::{validate_text, Identifiable},
    error::DomainError,
};

/// A savings goal with a deadline.
///
/// `current_amount` is not constrained to stay below `target_amount`; an
/// overfunded goal simply reports a ratio above one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: Uuid,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: NaiveDate,
}

impl Goal {
    pub fn new(name: impl Into<String>, target_amount: f64, deadline: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            current_amount: 0.0,
            deadline,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_text("goal name", &self.name)?;
        if !self.target_amount.is_finite() || self.target_amount <= 0.0 {
            return Err(DomainError::InvalidTarget(self.target_amount));
        }
        if !self.current_amount.is_finite() || self.current_amount < 0.0 {
            return Err(DomainError::NegativeAmount(self.current_amount));
        }
        Ok(())
    }

    /// Unclamped completion ratio; consumers clamp for bar rendering only.
    pub fn progress_ratio(&self) -> f64 {
        if self.target_amount > 0.0 {
            self.current_amount / self.target_amount
        } else {
            0.0
        }
    }

    /// Whole days until the deadline; negative once it has passed.
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }
}

impl Identifiable for Goal {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn progress_ratio_is_not_clamped() {
        let mut goal = Goal::new("Reserva", 1000.0, date(2026, 12, 31));
        goal.current_amount = 1200.0;
        assert!((goal.progress_ratio() - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn days_left_goes_negative_past_deadline() {
        let goal = Goal::new("Viagem", 500.0, date(2026, 1, 10));
        assert_eq!(goal.days_left(date(2026, 1, 12)), -2);
    }
}
