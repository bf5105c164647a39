use crate::errors::{StatementParseError, StatementResult};
use crate::parsers::amount::parse_amount;
use crate::parsers::lines::is_transaction_start;

use super::dto::Transaction;

/// date + time + user + description + debit + credit + balance, with at least
/// two description tokens.
const MIN_TOKENS: usize = 8;

/// Parses one reassembled transaction block.
///
/// Token layout: `DATE TIME DESCRIPTION... USER DEBIT CREDIT BALANCE`. The last
/// three tokens are the amounts and the one before them is the user id.
pub(super) fn parse_block(block: &str) -> StatementResult<Transaction> {
    let parts: Vec<&str> = block.split_whitespace().collect();
    let n = parts.len();

    if n < MIN_TOKENS {
        return Err(StatementParseError::BlockTooShort(n));
    }

    if !is_transaction_start(parts[0]) {
        return Err(StatementParseError::BlockMissingDate(parts[0].to_string()));
    }

    let debit = parse_amount(parts[n - 3])?;
    let credit = parse_amount(parts[n - 2])?;
    let balance = parse_amount(parts[n - 1])?;

    Ok(Transaction {
        transaction_date: format!("{} {}", parts[0], parts[1]),
        description: parts[2..n - 4].join(" "),
        user_id: parts[n - 4].to_string(),
        debit,
        credit,
        balance,
    })
}
