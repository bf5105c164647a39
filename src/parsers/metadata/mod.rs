mod parser;
mod types;

pub mod prelude {
    pub use super::parser::MetadataExtractor;
    pub use super::types::{MetadataField, StatementMetadata};
}
