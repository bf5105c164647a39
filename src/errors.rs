use thiserror::Error;

/// Errors raised while turning statement page text into records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatementParseError {
    /// Token is not a decimal numeral once thousands separators are removed
    #[error("Invalid amount: {0:?}")]
    AmountInvalid(String),

    // ── Transaction block rejections ────────────────────────────────────────────

    /// Block has fewer tokens than date + time + user + description + 3 amounts
    #[error("Transaction block too short: {0} tokens")]
    BlockTooShort(usize),

    /// First token of the block does not start with a DD/MM/YY date
    #[error("Transaction block does not start with a date: {0:?}")]
    BlockMissingDate(String),

    // ── Typed conversions ───────────────────────────────────────────────────────

    /// Transaction date text could not be read as DD/MM/YY [HH:MM[:SS]]
    #[error("Invalid transaction date format: {0:?}")]
    TransactionDateInvalidFormat(String),
}

/// Convenience alias for results carrying the crate error
pub type StatementResult<T> = Result<T, StatementParseError>;
