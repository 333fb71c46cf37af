use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    category::Category,
    common::{Amounted, Identifiable},
};

/// A single variable expense recorded by the user.
///
/// Immutable once created; the only lifecycle operation besides creation is
/// deletion from the owning ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDateTime,
    pub category: Category,
}

impl Transaction {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        date: NaiveDateTime,
        category: Category,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            date,
            category,
        }
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        self.amount
    }
}
