//! Extract header metadata and transaction rows from the page text of
//! bilingual (Indonesian/English) bank statements.
//!
//! Page text comes from an external PDF-to-text step; this crate only parses it.
//!
//! ```rust,ignore
//! use bank_statement_text_rs::ParserBuilder;
//!
//! let result = ParserBuilder::new()
//!     .content(&pdftotext_output)
//!     .parse();
//!
//! println!("{}", result.metadata.account_no);
//! for tx in &result.transactions {
//!     println!("{} {} {}", tx.transaction_date, tx.description, tx.balance);
//! }
//! ```

mod builder;
mod types;

pub mod errors;
pub mod parsers;

pub use builder::{ParseResult, ParserBuilder, parse_pages};
pub use parsers::prelude::*;
pub use types::PostedTransaction;
