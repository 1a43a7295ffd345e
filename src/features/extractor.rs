use std::collections::HashMap;

use chrono::{Datelike, Timelike};
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::models::Transaction;

pub const FEATURE_NAMES: [&str; 15] = [
    "amount",
    "currency",
    "merchant_name",
    "merchant_category",
    "card_type",
    "location_city",
    "location_country",
    "latitude",
    "longitude",
    "trans_date_year",
    "trans_date_month",
    "trans_date_day",
    "trans_date_hour",
    "trans_date_minute",
    "trans_date_second"
];

/// Assigns integer codes to distinct values in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct Factorizer {
    codes: HashMap<String, usize>,
    uniques: Vec<String>
}

impl Factorizer {
    pub fn code(&mut self, value: &str) -> usize {
        if let Some(code) = self.codes.get(value) {
            return *code;
        }

        let code = self.uniques.len();
        self.codes.insert(value.to_string(), code);
        self.uniques.push(value.to_string());
        code
    }

    pub fn uniques(&self) -> &[String] {
        &self.uniques
    }
}

/// Row-major feature matrix with one class label per row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureMatrix {
    pub rows: Vec<Vec<f64>>,
    pub labels: Vec<usize>
}

#[derive(Default)]
struct Codebook {
    currency: Factorizer,
    merchant_name: Factorizer,
    merchant_category: Factorizer,
    card_type: Factorizer,
    location_city: Factorizer,
    location_country: Factorizer
}

impl FeatureMatrix {
    /// Timestamps are expanded into their calendar parts and string-valued
    /// columns are factorized in order of first appearance. The identifier
    /// is dropped.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut codebook = Codebook::default();
        let mut rows = Vec::with_capacity(transactions.len());
        let mut labels = Vec::with_capacity(transactions.len());

        for transaction in transactions {
            rows.push(Self::extract(transaction, &mut codebook));
            labels.push(transaction.label());
        }

        debug!(
            "Extracted [{}] from {} rows, factorizing {} merchants across {} cities",
            FEATURE_NAMES.join(", "),
            rows.len(),
            codebook.merchant_name.uniques().len(),
            codebook.location_city.uniques().len()
        );

        Self { rows, labels }
    }

    fn extract(transaction: &Transaction, codebook: &mut Codebook) -> Vec<f64> {
        let timestamp = transaction.timestamp;

        vec![
            transaction.amount.to_f64().unwrap_or_default(),
            codebook.currency.code(transaction.currency.as_str()) as f64,
            codebook.merchant_name.code(&transaction.merchant_name) as f64,
            codebook.merchant_category.code(transaction.merchant_category.as_str()) as f64,
            codebook.card_type.code(transaction.card_type.as_str()) as f64,
            codebook.location_city.code(&transaction.location_city) as f64,
            codebook.location_country.code(&transaction.location_country) as f64,
            transaction.latitude,
            transaction.longitude,
            f64::from(timestamp.year()),
            f64::from(timestamp.month()),
            f64::from(timestamp.day()),
            f64::from(timestamp.hour()),
            f64::from(timestamp.minute()),
            f64::from(timestamp.second())
        ]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns, taken from the first row.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    #[cfg(test)]
    pub fn class_count(&self, class: usize) -> usize {
        self.labels.iter().filter(|label| **label == class).count()
    }

    pub(crate) fn select(&self, indices: &[usize]) -> Self {
        Self {
            rows: indices.iter().map(|index| self.rows[*index].clone()).collect(),
            labels: indices.iter().map(|index| self.labels[*index]).collect()
        }
    }
}
