use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    common::{validate_amount, validate_text, Identifiable},
    error::DomainError,
    goal::Goal,
    profile::{FixedExpense, UserProfile},
    transaction::Transaction,
};

/// Full application-state snapshot for one user: profile (with fixed
/// expenses), variable transactions, and savings goals.
///
/// Mutators enforce the entry-boundary invariants (positive finite amounts,
/// non-empty required text); the metrics engine only ever reads a ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    pub profile: UserProfile,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl Ledger {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            transactions: Vec::new(),
            goals: Vec::new(),
        }
    }

    pub fn from_parts(
        profile: UserProfile,
        transactions: Vec<Transaction>,
        goals: Vec<Goal>,
    ) -> Self {
        Self {
            profile,
            transactions,
            goals,
        }
    }

    /// Records a transaction at the head of the list (newest first).
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<Uuid, DomainError> {
        validate_text("description", &transaction.description)?;
        validate_amount(transaction.amount)?;
        let id = transaction.id;
        self.transactions.insert(0, transaction);
        Ok(id)
    }

    pub fn remove_transaction(&mut self, id: Uuid) -> Result<Transaction, DomainError> {
        let index = self
            .transactions
            .iter()
            .position(|txn| txn.id() == id)
            .ok_or(DomainError::TransactionNotFound(id))?;
        Ok(self.transactions.remove(index))
    }

    pub fn add_goal(&mut self, goal: Goal) -> Result<Uuid, DomainError> {
        goal.validate()?;
        let id = goal.id;
        self.goals.push(goal);
        Ok(id)
    }

    /// Sets a goal's accumulated amount to an absolute value.
    pub fn set_goal_amount(&mut self, id: Uuid, amount: f64) -> Result<(), DomainError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::NegativeAmount(amount));
        }
        let goal = self
            .goals
            .iter_mut()
            .find(|goal| goal.id() == id)
            .ok_or(DomainError::GoalNotFound(id))?;
        goal.current_amount = amount;
        Ok(())
    }

    pub fn remove_goal(&mut self, id: Uuid) -> Result<Goal, DomainError> {
        let index = self
            .goals
            .iter()
            .position(|goal| goal.id() == id)
            .ok_or(DomainError::GoalNotFound(id))?;
        Ok(self.goals.remove(index))
    }

    /// Replaces the fixed-expense list wholesale after validating every entry.
    pub fn set_fixed_expenses(&mut self, expenses: Vec<FixedExpense>) -> Result<(), DomainError> {
        for expense in &expenses {
            expense.validate()?;
        }
        self.profile.fixed_expenses = expenses;
        Ok(())
    }

    pub fn set_profile(&mut self, profile: UserProfile) -> Result<(), DomainError> {
        profile.validate()?;
        self.profile = profile;
        Ok(())
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use chrono::NaiveDate;

    fn instant(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn sample_ledger() -> Ledger {
        Ledger::new(UserProfile::new("Ana", 3000.0))
    }

    #[test]
    fn add_transaction_rejects_non_positive_amount() {
        let mut ledger = sample_ledger();
        let txn = Transaction::new("Café", 0.0, instant(2025, 6, 1), Category::Alimentacao);
        assert_eq!(
            ledger.add_transaction(txn),
            Err(DomainError::InvalidAmount(0.0))
        );
        assert_eq!(ledger.transaction_count(), 0);
    }

    #[test]
    fn transactions_are_kept_newest_first() {
        let mut ledger = sample_ledger();
        let first = Transaction::new("Mercado", 80.0, instant(2025, 6, 1), Category::Compras);
        let second = Transaction::new("Ônibus", 5.0, instant(2025, 6, 2), Category::Transporte);
        ledger.add_transaction(first).unwrap();
        ledger.add_transaction(second).unwrap();
        assert_eq!(ledger.transactions[0].description, "Ônibus");
    }

    #[test]
    fn set_goal_amount_updates_the_matching_goal() {
        let mut ledger = sample_ledger();
        let deadline = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let id = ledger
            .add_goal(Goal::new("Reserva", 1000.0, deadline))
            .unwrap();
        ledger.set_goal_amount(id, 250.0).unwrap();
        assert!((ledger.goals[0].current_amount - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn remove_goal_reports_missing_ids() {
        let mut ledger = sample_ledger();
        let id = Uuid::new_v4();
        assert_eq!(ledger.remove_goal(id), Err(DomainError::GoalNotFound(id)));
    }

    #[test]
    fn set_fixed_expenses_validates_every_entry() {
        let mut ledger = sample_ledger();
        let result = ledger.set_fixed_expenses(vec![
            FixedExpense::new("Aluguel", 1000.0),
            FixedExpense::new("Internet", -10.0),
        ]);
        assert_eq!(result, Err(DomainError::InvalidAmount(-10.0)));
        assert!(ledger.profile.fixed_expenses.is_empty());
    }
}
