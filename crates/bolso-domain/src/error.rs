use thiserror::Error;
use uuid::Uuid;

/// Validation and lookup failures raised at the entry boundary.
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("amount must be a positive number, got {0}")]
    InvalidAmount(f64),
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("target amount must be positive, got {0}")]
    InvalidTarget(f64),
    #[error("accumulated amount must not be negative, got {0}")]
    NegativeAmount(f64),
    #[error("transaction not found: {0}")]
    TransactionNotFound(Uuid),
    #[error("goal not found: {0}")]
    GoalNotFound(Uuid),
}
