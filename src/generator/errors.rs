use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Fraud rate must be within [0, 1], got [{0}]")]
    InvalidFraudRate(f64),
    #[error("End [{end}] must be after start [{start}]")]
    InvalidDateRange {
        start: NaiveDateTime,
        end: NaiveDateTime
    },
    #[error("Number of records must be greater than zero")]
    NoRecords,
    #[error("Number of records [{0}] exceeds the transaction id range")]
    TooManyRecords(usize),
    #[error("Invalid sampling distribution: {0}")]
    Distribution(String),
    #[error("Sampled amount [{0}] cannot be represented as a decimal")]
    AmountOutOfRange(f64),
    #[error("Sampled timestamp offset of [{0}] seconds is out of range")]
    TimestampOutOfRange(i64),
    #[error("Merchant category [{0}] has no merchant names")]
    EmptyMerchantTable(&'static str)
}

impl GeneratorError {
    pub fn distribution(error: impl std::fmt::Display) -> Self {
        Self::Distribution(error.to_string())
    }
}
