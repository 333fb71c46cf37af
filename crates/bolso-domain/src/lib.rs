//! Domain models for the bolso personal budgeting application.
//!
//! Entities here are created and mutated by user-facing collaborators (the
//! CLI forms) and persisted by the storage crate; the metrics engine in
//! `bolso-core` only ever reads them.

pub mod category;
pub mod common;
pub mod error;
pub mod goal;
pub mod ledger;
pub mod profile;
pub mod transaction;

pub use category::Category;
pub use common::{sum_amounts, validate_amount, validate_text, Amounted, Identifiable};
pub use error::DomainError;
pub use goal::Goal;
pub use ledger::Ledger;
pub use profile::{FixedExpense, UserProfile};
pub use transaction::Transaction;
