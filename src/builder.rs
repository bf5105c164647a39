use crate::{errors::StatementParseError, parsers::prelude::*};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Page separator emitted by `pdftotext` and similar text dumps.
const PAGE_BREAK: char = '\x0c';

/// Header metadata plus every transaction row, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub metadata: StatementMetadata,
    pub transactions: Vec<Transaction>,
}

/// Parses already-extracted page texts. Metadata is read from the first page,
/// transactions from all of them.
pub fn parse_pages(pages: &[&str]) -> ParseResult {
    let metadata = MetadataExtractor::parse(pages);
    let transactions = TransactionSegmenter::parse(pages);

    debug!(
        "Parsed statement: {} pages, {} transactions, account {:?}",
        pages.len(),
        transactions.len(),
        metadata.account_no
    );

    ParseResult {
        metadata,
        transactions,
    }
}

#[derive(Debug, Default)]
pub struct ParserBuilder {
    pages: Vec<String>,
}

impl ParserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one page of text.
    pub fn page(mut self, text: &str) -> Self {
        self.pages.push(text.to_string());
        self
    }

    /// Appends pages in order.
    pub fn pages<I, S>(mut self, pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.pages
            .extend(pages.into_iter().map(|page| page.as_ref().to_string()));
        self
    }

    /// Appends a whole-document text dump, split into pages on form feeds.
    pub fn content(self, content: &str) -> Self {
        self.pages(content.split(PAGE_BREAK))
    }

    pub fn parse(self) -> ParseResult {
        let pages: Vec<&str> = self.pages.iter().map(String::as_str).collect();
        parse_pages(&pages)
    }

    /// Parses and converts every transaction into `T`, failing on the first
    /// row that does not convert.
    pub fn parse_into<T>(self) -> Result<Vec<T>, StatementParseError>
    where
        T: TryFrom<Transaction, Error = StatementParseError>,
    {
        self.parse()
            .transactions
            .into_iter()
            .map(T::try_from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PostedTransaction;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const PAGE_ONE: &str = "
PT BANK CONTOH TBK
LAPORAN TRANSAKSI
No. Rekening
Account No
: 123-456-789
Unit Kerja
Business Unit
: KCP JAKARTA SUDIRMAN
Nama Produk
Product Name
: GIRO RUPIAH
Valuta
Currency
: IDR
Tanggal Laporan
Statement Date
: 31/05/25
Periode Transaksi
Transaction Period
: 01/05/25 - 31/05/25
Transaction Date
Tanggal Transaksi Keterangan User ID Debet Kredit Saldo
02/05/25 14:30 PAYMENT TO SUPPLIER X
PO-2025-118 JDOE 1,000.00 0.00 5,000.00
03/05/25 09:15 TRANSFER FROM CUSTOMER ABC BSMITH 0.00 2,500.00 7,500.00
04/05/25 10:00 BIAYA ADMINISTRASI
";

    const PAGE_TWO: &str = "
BULANAN REKENING SYSTEM 15,000.00 0.00 7,485,000.00
05/05/25 11:45 SETORAN TUNAI CABANG TELLER01 0.00 1,000,000.00 8,485,000.00
";

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_builder_new() {
        let builder = ParserBuilder::new();
        assert!(builder.pages.is_empty());
    }

    #[test]
    fn test_builder_pages_and_page_append_in_order() {
        let builder = ParserBuilder::new().page("one").pages(["two", "three"]).page("four");
        assert_eq!(builder.pages, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_builder_content_splits_on_form_feed() {
        let builder = ParserBuilder::new().content("page one\x0cpage two\x0c");
        assert_eq!(builder.pages, vec!["page one", "page two", ""]);
    }

    #[test]
    fn test_builder_without_pages_parses_to_empty() {
        let result = ParserBuilder::new().parse();

        assert_eq!(result, ParseResult::default());
        assert_eq!(result.metadata.fields().count(), 6);
    }

    #[test]
    fn test_parse_full_statement() {
        let result = ParserBuilder::new().pages([PAGE_ONE, PAGE_TWO]).parse();

        assert_eq!(result.metadata.account_no, "123-456-789");
        assert_eq!(result.metadata.business_unit, "KCP JAKARTA SUDIRMAN");
        assert_eq!(result.metadata.product_name, "GIRO RUPIAH");
        assert_eq!(result.metadata.currency, "IDR");
        assert_eq!(result.metadata.statement_date, "31/05/25");
        assert_eq!(result.metadata.transaction_period, "01/05/25 - 31/05/25");

        assert_eq!(result.transactions.len(), 4);

        let first = &result.transactions[0];
        assert_eq!(first.transaction_date, "02/05/25 14:30");
        assert_eq!(first.description, "PAYMENT TO SUPPLIER X PO-2025-118");
        assert_eq!(first.user_id, "JDOE");
        assert_eq!(first.debit, dec("1000"));

        let spanning = &result.transactions[2];
        assert_eq!(spanning.transaction_date, "04/05/25 10:00");
        assert_eq!(spanning.description, "BIAYA ADMINISTRASI BULANAN REKENING");
        assert_eq!(spanning.debit, dec("15000"));

        let last = &result.transactions[3];
        assert_eq!(last.user_id, "TELLER01");
        assert_eq!(last.credit, dec("1000000"));
        assert_eq!(last.balance, dec("8485000"));
    }

    #[test]
    fn test_parse_content_matches_pages() {
        let content = format!("{}\x0c{}", PAGE_ONE, PAGE_TWO);

        let from_content = ParserBuilder::new().content(&content).parse();
        let from_pages = parse_pages(&[PAGE_ONE, PAGE_TWO]);

        assert_eq!(from_content, from_pages);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let first = parse_pages(&[PAGE_ONE, PAGE_TWO]);
        let second = parse_pages(&[PAGE_ONE, PAGE_TWO]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_metadata_only_from_first_page() {
        let result = parse_pages(&["Laporan", "Valuta\nCurrency\n: IDR"]);
        assert!(result.metadata.is_empty());
    }

    #[test]
    fn test_parse_into_posted_transactions() {
        let posted: Vec<PostedTransaction> = ParserBuilder::new()
            .pages([PAGE_ONE, PAGE_TWO])
            .parse_into()
            .unwrap();

        assert_eq!(posted.len(), 4);
        assert_eq!(posted[0].posted_at.to_string(), "2025-05-02 14:30:00");
        assert_eq!(posted[3].posted_at.to_string(), "2025-05-05 11:45:00");
    }

    #[test]
    fn test_parse_into_fails_on_unreadable_date() {
        let result: Result<Vec<PostedTransaction>, _> = ParserBuilder::new()
            .page("99/99/99 14:30 A B USER 1.00 0.00 1.00")
            .parse_into();

        assert!(matches!(
            result,
            Err(StatementParseError::TransactionDateInvalidFormat(ref s)) if s == "99/99/99 14:30"
        ));
    }

    #[test]
    fn test_parse_result_serialization() {
        let result = parse_pages(&[PAGE_ONE, PAGE_TWO]);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["metadata"]["currency"], "IDR");
        assert_eq!(json["transactions"].as_array().unwrap().len(), 4);
        assert_eq!(json["transactions"][3]["credit"].as_f64(), Some(1_000_000.0));
    }
}
