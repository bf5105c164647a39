use serde::{Deserialize, Serialize};

/// Header fields printed above the transaction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataField {
    AccountNo,
    BusinessUnit,
    ProductName,
    Currency,
    StatementDate,
    TransactionPeriod,
}

impl MetadataField {
    pub const ALL: [MetadataField; 6] = [
        MetadataField::AccountNo,
        MetadataField::BusinessUnit,
        MetadataField::ProductName,
        MetadataField::Currency,
        MetadataField::StatementDate,
        MetadataField::TransactionPeriod,
    ];

    /// Output key of the field.
    pub fn key(&self) -> &'static str {
        match self {
            MetadataField::AccountNo => "account_no",
            MetadataField::BusinessUnit => "business_unit",
            MetadataField::ProductName => "product_name",
            MetadataField::Currency => "currency",
            MetadataField::StatementDate => "statement_date",
            MetadataField::TransactionPeriod => "transaction_period",
        }
    }
}

/// Label pairs as printed on the statement: the Indonesian label line is
/// followed by its English translation. Compared lowercase.
pub(super) const LABELS: &[(&str, &str, MetadataField)] = &[
    ("no. rekening", "account no", MetadataField::AccountNo),
    ("unit kerja", "business unit", MetadataField::BusinessUnit),
    ("nama produk", "product name", MetadataField::ProductName),
    ("valuta", "currency", MetadataField::Currency),
    ("tanggal laporan", "statement date", MetadataField::StatementDate),
    ("periode transaksi", "transaction period", MetadataField::TransactionPeriod),
];

/// Statement header. Fields that were not found are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementMetadata {
    #[serde(default)]
    pub account_no: String,
    #[serde(default)]
    pub business_unit: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub statement_date: String,
    #[serde(default)]
    pub transaction_period: String,
}

impl StatementMetadata {
    pub fn get(&self, field: MetadataField) -> &str {
        match field {
            MetadataField::AccountNo => &self.account_no,
            MetadataField::BusinessUnit => &self.business_unit,
            MetadataField::ProductName => &self.product_name,
            MetadataField::Currency => &self.currency,
            MetadataField::StatementDate => &self.statement_date,
            MetadataField::TransactionPeriod => &self.transaction_period,
        }
    }

    pub fn set(&mut self, field: MetadataField, value: String) {
        let slot = match field {
            MetadataField::AccountNo => &mut self.account_no,
            MetadataField::BusinessUnit => &mut self.business_unit,
            MetadataField::ProductName => &mut self.product_name,
            MetadataField::Currency => &mut self.currency,
            MetadataField::StatementDate => &mut self.statement_date,
            MetadataField::TransactionPeriod => &mut self.transaction_period,
        };
        *slot = value;
    }

    /// `(key, value)` pairs for all six fields, found or not.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        MetadataField::ALL
            .into_iter()
            .map(move |field| (field.key(), self.get(field)))
    }

    pub fn is_empty(&self) -> bool {
        self.fields().all(|(_, value)| value.is_empty())
    }
}
