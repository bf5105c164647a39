pub mod amount;
pub mod lines;
pub mod metadata;
pub mod traits;
pub mod transactions;

pub mod prelude {
    pub use super::amount::parse_amount;
    pub use super::lines::is_transaction_start;
    pub use super::metadata::prelude::*;
    pub use super::traits::SectionParser;
    pub use super::transactions::prelude::*;
}
