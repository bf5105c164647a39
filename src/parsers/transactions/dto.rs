use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::TransactionDate;

/// One transaction row as it reads on the statement.
///
/// Amounts are kept as [`Decimal`] and serialize as plain JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Date and time exactly as printed, e.g. `02/05/25 14:30`.
    pub transaction_date: String,
    pub description: String,
    pub user_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub debit: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub credit: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

impl Transaction {
    pub fn date(&self) -> TransactionDate {
        TransactionDate::from(self.transaction_date.as_str())
    }

    pub fn debit_f64(&self) -> f64 {
        self.debit.to_f64().unwrap_or_default()
    }

    pub fn credit_f64(&self) -> f64 {
        self.credit.to_f64().unwrap_or_default()
    }

    pub fn balance_f64(&self) -> f64 {
        self.balance.to_f64().unwrap_or_default()
    }
}
