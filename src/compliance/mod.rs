mod report;
mod rule;
mod samples;
mod workflow;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::models::Transaction;
use crate::types::{timestamp, Currency};

pub use report::generate_report;
pub use rule::{AmountThresholdRule, FraudRule, Prediction, DEFAULT_AMOUNT_THRESHOLD};
pub use samples::sample_transactions;
pub use workflow::{compliance_workflow, ScreenedTransaction};

/// The subset of a transaction the compliance rules look at.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTransaction {
    pub transaction_id: String,
    pub timestamp: NaiveDateTime,
    /// Format the record's timestamp was written in, reused when reporting.
    pub timestamp_format: &'static str,
    pub amount: Decimal,
    pub currency: Currency,
    pub merchant_name: String
}

impl SampleTransaction {
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(self.timestamp_format).to_string()
    }
}

impl From<&Transaction> for SampleTransaction {
    fn from(transaction: &Transaction) -> Self {
        Self {
            transaction_id: transaction.transaction_id.to_string(),
            timestamp: transaction.timestamp,
            timestamp_format: timestamp::FORMAT,
            amount: transaction.amount,
            currency: transaction.currency,
            merchant_name: transaction.merchant_name.clone()
        }
    }
}
