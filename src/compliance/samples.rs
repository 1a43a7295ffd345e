use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::compliance::SampleTransaction;
use crate::types::{timestamp, Currency};

// (id, minute, amount mantissa, amount scale, currency, merchant)
const SAMPLES: [(&str, u32, i64, u32, Currency, &str); 5] = [
    ("txn_1", 30, 15075, 2, Currency::Usd, "Gadget World"),
    ("txn_2", 32, 8000, 1, Currency::Gbp, "FlyAway"),
    ("txn_3", 35, 2502, 1, Currency::Usd, "Tech Central"),
    ("txn_4", 40, 9500, 1, Currency::Usd, "Holiday Planners"),
    ("txn_5", 45, 1209, 1, Currency::Gbp, "Style Central")
];

/// The five demonstration records screened when no dataset is given.
///
/// All of them fall on 2025-11-20 between 10:30 and 10:45.
pub fn sample_transactions() -> Vec<SampleTransaction> {
    SAMPLES.iter()
        .map(|(transaction_id, minute, mantissa, scale, currency, merchant_name)| SampleTransaction {
            transaction_id: transaction_id.to_string(),
            timestamp: sample_time(*minute),
            timestamp_format: timestamp::ISO_FORMAT,
            amount: Decimal::new(*mantissa, *scale),
            currency: *currency,
            merchant_name: merchant_name.to_string()
        })
        .collect()
}

fn sample_time(minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 11, 20)
        .and_then(|date| date.and_hms_opt(10, minute, 0))
        .unwrap_or_default()
}
