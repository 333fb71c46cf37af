//! Filesystem-backed JSON persistence for the bolso application state.
//!
//! Three named records mirror the application's state shape: the user profile
//! (with fixed expenses), the transaction list, and the goal list. Each record
//! is rewritten in full on every mutation (write-through, last write wins) and
//! staged through a temporary file so a crashed write never corrupts the
//! previous snapshot.

use std::{
    fs,
    path::{Path, PathBuf},
};

use bolso_domain::{Goal, Ledger, Transaction, UserProfile};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

const PROFILE_FILE: &str = "profile.json";
const EXPENSES_FILE: &str = "expenses.json";
const GOALS_FILE: &str = "goals.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
}

/// Write-through JSON persistence rooted at a data directory.
#[derive(Debug, Clone)]
pub struct JsonStateStorage {
    data_dir: PathBuf,
}

impl JsonStateStorage {
    pub fn new(data_dir: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Missing files mean "no data yet", never an error.
    pub fn load_profile(&self) -> Result<Option<UserProfile>, StorageError> {
        self.read_optional(PROFILE_FILE)
    }

    pub fn save_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        self.write_record(PROFILE_FILE, profile)
    }

    pub fn load_transactions(&self) -> Result<Vec<Transaction>, StorageError> {
        Ok(self.read_optional(EXPENSES_FILE)?.unwrap_or_default())
    }

    pub fn save_transactions(&self, transactions: &[Transaction]) -> Result<(), StorageError> {
        self.write_record(EXPENSES_FILE, &transactions)
    }

    pub fn load_goals(&self) -> Result<Vec<Goal>, StorageError> {
        Ok(self.read_optional(GOALS_FILE)?.unwrap_or_default())
    }

    pub fn save_goals(&self, goals: &[Goal]) -> Result<(), StorageError> {
        self.write_record(GOALS_FILE, &goals)
    }

    /// Assembles the full snapshot, or `None` before onboarding.
    pub fn load_ledger(&self) -> Result<Option<Ledger>, StorageError> {
        let Some(profile) = self.load_profile()? else {
            return Ok(None);
        };
        Ok(Some(Ledger::from_parts(
            profile,
            self.load_transactions()?,
            self.load_goals()?,
        )))
    }

    pub fn save_ledger(&self, ledger: &Ledger) -> Result<(), StorageError> {
        self.save_profile(&ledger.profile)?;
        self.save_transactions(&ledger.transactions)?;
        self.save_goals(&ledger.goals)
    }

    /// Removes all three records.
    pub fn reset(&self) -> Result<(), StorageError> {
        for file in [PROFILE_FILE, EXPENSES_FILE, GOALS_FILE] {
            let path = self.data_dir.join(file);
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        tracing::info!("local records cleared");
        Ok(())
    }

    fn read_optional<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>, StorageError> {
        let path = self.data_dir.join(file);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(path)?;
        serde_json::from_str(&data)
            .map(Some)
            .map_err(|err| StorageError::Serde(err.to_string()))
    }

    fn write_record<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StorageError> {
        let path = self.data_dir.join(file);
        let json = serde_json::to_string_pretty(value)
            .map_err(|err| StorageError::Serde(err.to_string()))?;
        let tmp = tmp_path(&path);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(record = file, "record persisted");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
