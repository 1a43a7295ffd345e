use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};

use crate::generator::GeneratorError;
use crate::types::{Currency, TransactionId};

pub const DEFAULT_NUM_RECORDS: usize = 20_000;
pub const DEFAULT_FRAUD_RATE: f64 = 0.015;
pub const DEFAULT_OUTPUT_PATH: &str = "financial_transactions_dataset.csv";

/// Settings for a single synthetic dataset run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub num_records: usize,
    /// Probability that a generated record is labeled fraudulent.
    pub fraud_rate: f64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub currency: Currency,
    pub output_path: PathBuf,
    /// Fixed seed for reproducible output; `None` draws from OS entropy.
    pub seed: Option<u64>
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.num_records == 0 {
            return Err(GeneratorError::NoRecords)
        }

        if TransactionId::try_from(self.num_records).is_err() {
            return Err(GeneratorError::TooManyRecords(self.num_records))
        }

        if !(0.0..=1.0).contains(&self.fraud_rate) {
            return Err(GeneratorError::InvalidFraudRate(self.fraud_rate))
        }

        if self.end <= self.start {
            return Err(GeneratorError::InvalidDateRange { start: self.start, end: self.end })
        }

        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_records: DEFAULT_NUM_RECORDS,
            fraud_rate: DEFAULT_FRAUD_RATE,
            start: date_time(2024, 1, 1, 0, 0, 0),
            end: date_time(2025, 11, 28, 23, 59, 59),
            currency: Currency::Eur,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            seed: None
        }
    }
}

fn date_time(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .unwrap_or_default()
}
