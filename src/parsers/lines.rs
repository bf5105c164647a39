use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Prefix only: "02/05/25", "02/05/2025" and "99/99/99" all qualify.
    static ref TRANSACTION_START: Regex = Regex::new(r"^\d{2}/\d{2}/\d{2}").unwrap();
}

/// Whether `line` opens a new transaction record, i.e. begins with a
/// `DD/MM/YY` date token. No calendar validation is done.
pub fn is_transaction_start(line: &str) -> bool {
    TRANSACTION_START.is_match(line)
}

/// Trimmed, non-empty lines of one page of extracted text.
pub fn page_lines(page: &str) -> impl Iterator<Item = &str> {
    page.lines().map(str::trim).filter(|line| !line.is_empty())
}
