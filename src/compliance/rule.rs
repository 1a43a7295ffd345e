use rust_decimal::Decimal;

use crate::compliance::SampleTransaction;

pub const DEFAULT_AMOUNT_THRESHOLD: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Prediction {
    Normal,
    Fraudulent
}

pub trait FraudRule: Send + Sync {
    fn predict(&self, transaction: &SampleTransaction) -> Prediction;
}

/// Flags any transaction whose amount is strictly above the threshold.
#[derive(Debug, Clone, Copy)]
pub struct AmountThresholdRule {
    threshold: Decimal
}

impl AmountThresholdRule {
    pub fn new(threshold: Decimal) -> Self {
        Self { threshold }
    }
}

impl Default for AmountThresholdRule {
    fn default() -> Self {
        Self::new(DEFAULT_AMOUNT_THRESHOLD)
    }
}

impl FraudRule for AmountThresholdRule {
    fn predict(&self, transaction: &SampleTransaction) -> Prediction {
        if transaction.amount > self.threshold {
            Prediction::Fraudulent
        } else {
            Prediction::Normal
        }
    }
}
