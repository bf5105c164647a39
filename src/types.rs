use crate::{errors::StatementParseError, parsers::prelude::*};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A transaction with its date read into a calendar date-time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostedTransaction {
    pub posted_at: NaiveDateTime,
    pub description: String,
    pub user_id: String,
    pub debit: Decimal,
    pub credit: Decimal,
    pub balance: Decimal,
}

impl PostedTransaction {
    /// Credit minus debit.
    pub fn net_amount(&self) -> Decimal {
        self.credit - self.debit
    }
}

impl TryFrom<Transaction> for PostedTransaction {
    type Error = StatementParseError;

    fn try_from(tx: Transaction) -> Result<Self, Self::Error> {
        Ok(PostedTransaction {
            posted_at: tx.date().try_into()?,
            description: tx.description,
            user_id: tx.user_id,
            debit: tx.debit,
            credit: tx.credit,
            balance: tx.balance,
        })
    }
}
