use chrono::NaiveDateTime;
use serde::{de, Deserialize, Deserializer, Serializer};

use crate::types::TypesError;

/// Stored form of every dataset timestamp.
pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses the stored form, falling back to the ISO `T` separator.
pub fn parse(value: &str) -> Result<NaiveDateTime, TypesError> {
    let value = value.trim();

    NaiveDateTime::parse_from_str(value, FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, ISO_FORMAT))
        .map_err(|source| TypesError::InvalidTimestamp { value: value.to_string(), source })
}

pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&timestamp.format(FORMAT))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse(&value).map_err(de::Error::custom)
}
