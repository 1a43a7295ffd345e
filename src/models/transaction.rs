use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::MerchantCategory;
use crate::types::{amount, timestamp, CardType, Currency, TransactionId};

/// Represents a single row of the labeled transaction dataset.
///
/// Field order is the CSV column order. Records are immutable once generated;
/// nothing in the crate mutates a `Transaction` after it is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// 1-based identifier, assigned in generation order.
    pub transaction_id: TransactionId,
    #[serde(with = "timestamp")]
    pub timestamp: NaiveDateTime,
    /// Amount rounded to two decimal places.
    #[serde(with = "amount")]
    pub amount: Decimal,
    pub currency: Currency,
    pub merchant_name: String,
    pub merchant_category: MerchantCategory,
    pub card_type: CardType,
    pub location_city: String,
    pub location_country: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Written as `0`/`1`.
    #[serde(with = "fraud_flag")]
    pub is_fraud: bool
}

impl Transaction {
    pub fn label(&self) -> usize {
        usize::from(self.is_fraud)
    }
}

/// A named place a transaction can originate from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub city: &'static str,
    pub country: &'static str,
    pub latitude: f64,
    pub longitude: f64
}

impl Location {
    pub const fn new(city: &'static str, country: &'static str, latitude: f64, longitude: f64) -> Self {
        Self { city, country, latitude, longitude }
    }
}

mod fraud_flag {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(is_fraud: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*is_fraud))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;

        match value.trim() {
            "1" | "true" | "True" => Ok(true),
            "0" | "false" | "False" => Ok(false),
            other => Err(de::Error::custom(format!("Invalid fraud flag: {other}")))
        }
    }
}
