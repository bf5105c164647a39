use tracing::debug;

use super::block::parse_block;
use super::dto::Transaction;
use crate::parsers::lines::{is_transaction_start, page_lines};
use crate::parsers::traits::SectionParser;

/// Rebuilds wrapped transaction rows from the page text of every page.
///
/// A line starting with a `DD/MM/YY` date opens a new block; any other line is
/// a continuation of the current one. Page breaks are not block boundaries.
/// Blocks that do not parse (headers, footers, page numbers) are dropped.
pub struct TransactionSegmenter;

impl SectionParser for TransactionSegmenter {
    type Output = Vec<Transaction>;

    fn is_supported(page: &str) -> bool {
        page_lines(page).any(is_transaction_start)
    }

    fn parse(pages: &[&str]) -> Self::Output {
        let mut transactions = Vec::new();
        let mut buffer = String::new();
        let mut dropped = 0usize;

        for line in pages.iter().flat_map(|page| page_lines(page)) {
            if is_transaction_start(line) {
                flush(&buffer, &mut transactions, &mut dropped);
                buffer.clear();
                buffer.push_str(line);
            } else {
                if !buffer.is_empty() {
                    buffer.push(' ');
                }
                buffer.push_str(line);
            }
        }
        flush(&buffer, &mut transactions, &mut dropped);

        debug!(
            "Parsed {} transactions from {} pages ({} blocks dropped)",
            transactions.len(),
            pages.len(),
            dropped
        );

        transactions
    }
}

fn flush(buffer: &str, transactions: &mut Vec<Transaction>, dropped: &mut usize) {
    if buffer.is_empty() {
        return;
    }

    match parse_block(buffer) {
        Ok(tx) => transactions.push(tx),
        Err(e) => {
            debug!("Dropping block {:?}: {}", buffer, e);
            *dropped += 1;
        }
    }
}
