use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serializer};

use crate::types::TypesError;

pub const DECIMAL_PLACES: u32 = 2;

/// Reads an amount from its text so the written scale is kept.
pub fn parse(value: &str) -> Result<Decimal, TypesError> {
    let value = value.trim();

    Decimal::from_str(value).map_err(|source| TypesError::InvalidAmount { value: value.to_string(), source })
}

pub fn serialize<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&format_args!("{:.*}", DECIMAL_PLACES as usize, amount))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse(&value).map_err(de::Error::custom)
}
