mod block;
mod dto;
mod parser;
mod types;

pub mod prelude {
    pub use super::dto::Transaction;
    pub use super::parser::TransactionSegmenter;
    pub use super::types::TransactionDate;
}
