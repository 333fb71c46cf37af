//! Application-state container: the in-memory ledger snapshot plus its
//! write-through persistence.

use std::path::PathBuf;

use bolso_core::Clock;
use bolso_domain::{FixedExpense, Goal, Ledger, Transaction, UserProfile};
use bolso_storage_json::JsonStateStorage;
use chrono::{Local, NaiveDateTime};
use uuid::Uuid;

use crate::errors::AppError;

/// Wall-clock implementation used by the running application.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Owns the current ledger snapshot and pushes every mutation straight
/// through to local storage before returning.
///
/// The metrics engine receives the snapshot read-only via [`AppState::ledger`];
/// nothing here is cached across calls.
pub struct AppState {
    storage: JsonStateStorage,
    ledger: Option<Ledger>,
}

impl AppState {
    pub fn open(data_dir: PathBuf) -> Result<Self, AppError> {
        let storage = JsonStateStorage::new(data_dir)?;
        let ledger = storage.load_ledger()?;
        Ok(Self { storage, ledger })
    }

    pub fn ledger(&self) -> Option<&Ledger> {
        self.ledger.as_ref()
    }

    pub fn require_ledger(&self) -> Result<&Ledger, AppError> {
        self.ledger.as_ref().ok_or(AppError::ProfileMissing)
    }

    pub fn is_onboarded(&self) -> bool {
        self.ledger.is_some()
    }

    /// Creates the initial profile and persists the empty ledger.
    pub fn onboard(&mut self, profile: UserProfile) -> Result<(), AppError> {
        profile.validate()?;
        let ledger = Ledger::new(profile);
        self.storage.save_ledger(&ledger)?;
        tracing::info!(user = %ledger.profile.name, "profile created");
        self.ledger = Some(ledger);
        Ok(())
    }

    pub fn add_expense(&mut self, transaction: Transaction) -> Result<Uuid, AppError> {
        let ledger = self.ledger.as_mut().ok_or(AppError::ProfileMissing)?;
        let id = ledger.add_transaction(transaction)?;
        self.storage.save_transactions(&ledger.transactions)?;
        tracing::debug!(%id, "expense recorded");
        Ok(id)
    }

    pub fn delete_expense(&mut self, id: Uuid) -> Result<Transaction, AppError> {
        let ledger = self.ledger.as_mut().ok_or(AppError::ProfileMissing)?;
        let removed = ledger.remove_transaction(id)?;
        self.storage.save_transactions(&ledger.transactions)?;
        tracing::debug!(%id, "expense deleted");
        Ok(removed)
    }

    pub fn add_goal(&mut self, goal: Goal) -> Result<Uuid, AppError> {
        let ledger = self.ledger.as_mut().ok_or(AppError::ProfileMissing)?;
        let id = ledger.add_goal(goal)?;
        self.storage.save_goals(&ledger.goals)?;
        Ok(id)
    }

    pub fn set_goal_amount(&mut self, id: Uuid, amount: f64) -> Result<(), AppError> {
        let ledger = self.ledger.as_mut().ok_or(AppError::ProfileMissing)?;
        ledger.set_goal_amount(id, amount)?;
        self.storage.save_goals(&ledger.goals)?;
        Ok(())
    }

    pub fn delete_goal(&mut self, id: Uuid) -> Result<Goal, AppError> {
        let ledger = self.ledger.as_mut().ok_or(AppError::ProfileMissing)?;
        let removed = ledger.remove_goal(id)?;
        self.storage.save_goals(&ledger.goals)?;
        Ok(removed)
    }

    pub fn set_fixed_expenses(&mut self, expenses: Vec<FixedExpense>) -> Result<(), AppError> {
        let ledger = self.ledger.as_mut().ok_or(AppError::ProfileMissing)?;
        ledger.set_fixed_expenses(expenses)?;
        self.storage.save_profile(&ledger.profile)?;
        Ok(())
    }

    pub fn set_profile(&mut self, profile: UserProfile) -> Result<(), AppError> {
        let ledger = self.ledger.as_mut().ok_or(AppError::ProfileMissing)?;
        ledger.set_profile(profile)?;
        self.storage.save_profile(&ledger.profile)?;
        Ok(())
    }

    /// Replaces the whole snapshot (used by a mirror pull).
    pub fn replace_ledger(&mut self, ledger: Ledger) -> Result<(), AppError> {
        ledger.profile.validate()?;
        self.storage.save_ledger(&ledger)?;
        self.ledger = Some(ledger);
        Ok(())
    }

    /// Deletes every record and returns to the pre-onboarding state.
    pub fn reset(&mut self) -> Result<(), AppError> {
        self.storage.reset()?;
        self.ledger = None;
        Ok(())
    }
}
