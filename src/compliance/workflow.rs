use tracing::debug;

use crate::compliance::{FraudRule, Prediction, SampleTransaction};

pub const FLAGGED_STATUS: &str = "flagged";
pub const FLAGGED_ACTION: &str = "Flagged for Manual Review";

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenedTransaction {
    pub transaction: SampleTransaction,
    pub status: &'static str,
    pub action_taken: &'static str
}

/// Runs every transaction through the rule and keeps the flagged ones in input order.
pub fn compliance_workflow<R>(rule: &R, transactions: &[SampleTransaction]) -> Vec<ScreenedTransaction>
where
    R: FraudRule + ?Sized,
{
    let flagged: Vec<ScreenedTransaction> = transactions.iter()
        .filter(|transaction| rule.predict(transaction) == Prediction::Fraudulent)
        .map(|transaction| ScreenedTransaction {
            transaction: transaction.clone(),
            status: FLAGGED_STATUS,
            action_taken: FLAGGED_ACTION
        })
        .collect();

    debug!("Screened {} transactions, flagged {}", transactions.len(), flagged.len());

    flagged
}
