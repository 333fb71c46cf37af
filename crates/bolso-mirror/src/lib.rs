//! Client for the optional hosted table-store mirror.
//!
//! The mirror is an external collaborator: the metrics engine never calls it
//! and local state stays authoritative. Operations are table-oriented
//! create/read/update/delete against four entities plus basic email/password
//! authentication. Failures are surfaced to the calling UI action and never
//! retried here.

mod client;
mod error;
mod rows;

pub use client::{AuthUser, MirrorClient, Session};
pub use error::MirrorError;
pub use rows::{ExpenseRow, FixedExpenseRow, GoalRow, ProfileRow};
