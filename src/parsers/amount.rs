use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::{StatementParseError, StatementResult};

/// Parses a statement amount such as `1,234,567.89`.
///
/// Thousands-separator commas are removed before the remainder is read as a
/// decimal numeral. A blank token stands for an empty amount column and reads
/// as zero; anything else that is not a decimal numeral is rejected.
pub fn parse_amount(token: &str) -> StatementResult<Decimal> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let cleaned = trimmed.replace(',', "");
    Decimal::from_str(&cleaned).map_err(|_| StatementParseError::AmountInvalid(token.to_string()))
}
