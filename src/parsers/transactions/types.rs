use crate::errors::StatementParseError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Date (and usually time) of a transaction row as printed on the statement.
///
/// Rows carry a two-digit year and a 24h time:
/// - DD/MM/YY HH:MM
/// - DD/MM/YY HH:MM:SS
/// - DD/MM/YY (no time column, read as midnight)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDate(String);

impl TransactionDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn parse(&self) -> Result<NaiveDateTime, StatementParseError> {
        let s = self.0.trim();

        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%d/%m/%y %H:%M") {
            return Ok(dt);
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%d/%m/%y %H:%M:%S") {
            return Ok(dt);
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%d/%m/%y") {
            return Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default());
        }

        Err(StatementParseError::TransactionDateInvalidFormat(self.0.clone()))
    }
}

impl From<String> for TransactionDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TransactionDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<TransactionDate> for NaiveDateTime {
    type Error = StatementParseError;

    fn try_from(date: TransactionDate) -> Result<Self, Self::Error> {
        date.parse()
    }
}
