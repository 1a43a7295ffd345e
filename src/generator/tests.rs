use super::tables::{self, MERCHANT_PROFILES, PRIMARY_LOCATIONS, SECONDARY_LOCATIONS};
use super::{GenerationSummary, GeneratorConfig, GeneratorError, SyntheticGenerator};

use std::collections::HashSet;

use anyhow::Result;
use chrono::Timelike;
use rust_decimal::Decimal;

use crate::types::{timestamp, Currency};

fn seeded_config(num_records: usize, fraud_rate: f64, seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        num_records,
        fraud_rate,
        seed: Some(seed),
        ..GeneratorConfig::default()
    }
}

#[test]
fn test_generator_produces_configured_record_count() -> Result<()> {
    let mut generator = SyntheticGenerator::new(seeded_config(2_500, 0.015, 7))?;
    let transactions = generator.generate()?;

    assert_eq!(transactions.len(), 2_500);

    Ok(())
}

#[test]
fn test_generator_fraud_proportion_within_sampling_tolerance() -> Result<()> {
    let num_records = 20_000;
    let fraud_rate = 0.015;
    let mut generator = SyntheticGenerator::new(seeded_config(num_records, fraud_rate, 42))?;
    let summary = GenerationSummary::from_transactions(&generator.generate()?);

    // Five standard deviations of the binomial proportion.
    let tolerance = 5.0 * (fraud_rate * (1.0 - fraud_rate) / num_records as f64).sqrt();
    let observed = summary.fraudulent as f64 / summary.total as f64;

    assert!((observed - fraud_rate).abs() < tolerance, "observed fraud rate {observed}");

    Ok(())
}

#[test]
fn test_generator_output_is_sorted_and_ids_are_a_permutation() -> Result<()> {
    let mut generator = SyntheticGenerator::new(seeded_config(1_000, 0.2, 3))?;
    let transactions = generator.generate()?;

    assert!(transactions.windows(2).all(|pair| pair[0].timestamp <= pair[1].timestamp));

    let ids: HashSet<u32> = transactions.iter().map(|transaction| transaction.transaction_id).collect();
    let expected: HashSet<u32> = (1..=1_000).collect();

    assert_eq!(ids, expected);

    Ok(())
}

#[test]
fn test_generator_timestamps_stay_within_configured_range() -> Result<()> {
    let config = seeded_config(2_000, 0.5, 11);
    let (start, end) = (config.start, config.end);
    let mut generator = SyntheticGenerator::new(config)?;

    for transaction in generator.generate()? {
        assert!(transaction.timestamp >= start && transaction.timestamp <= end);
    }

    Ok(())
}

#[test]
fn test_unusual_hour_rewrite_keeps_the_calendar_day() -> Result<()> {
    let config = GeneratorConfig {
        start: timestamp::parse("2024-06-01 10:00:00")?,
        end: timestamp::parse("2024-06-01 12:00:00")?,
        ..seeded_config(2_000, 1.0, 19)
    };
    let day = config.start.date();
    let mut generator = SyntheticGenerator::new(config)?;
    let transactions = generator.generate()?;

    assert!(transactions.iter().all(|transaction| transaction.timestamp.date() == day));
    assert!(transactions.iter().any(|transaction| !(10..=12).contains(&transaction.timestamp.hour())));

    Ok(())
}

#[test]
fn test_generator_respects_amount_floors_and_precision() -> Result<()> {
    let mut generator = SyntheticGenerator::new(seeded_config(3_000, 0.5, 5))?;

    for transaction in generator.generate()? {
        let floor = if transaction.is_fraud { Decimal::from(50) } else { Decimal::ONE };

        assert!(transaction.amount >= floor);
        assert!(transaction.amount.scale() <= 2);
        assert_eq!(transaction.currency, Currency::Eur);
    }

    Ok(())
}

#[test]
fn test_generator_merchant_names_match_their_category() -> Result<()> {
    let mut generator = SyntheticGenerator::new(seeded_config(1_500, 0.3, 9))?;

    for transaction in generator.generate()? {
        let profile = MERCHANT_PROFILES.iter()
            .find(|profile| profile.category == transaction.merchant_category)
            .ok_or_else(|| anyhow::anyhow!("Category missing from table"))?;

        let (base, suffix) = transaction.merchant_name.rsplit_once('_')
            .ok_or_else(|| anyhow::anyhow!("Merchant name without suffix"))?;
        let suffix: u32 = suffix.parse()?;

        assert!(profile.names.contains(&base));
        assert!((100..=999).contains(&suffix));
    }

    Ok(())
}

#[test]
fn test_fraudulent_transactions_favour_secondary_locations() -> Result<()> {
    let mut generator = SyntheticGenerator::new(seeded_config(4_000, 1.0, 13))?;
    let transactions = generator.generate()?;

    let secondary = transactions.iter()
        .filter(|transaction| SECONDARY_LOCATIONS.iter().any(|location| location.city == transaction.location_city))
        .count();

    // 90% expected.
    assert!(secondary as f64 / transactions.len() as f64 > 0.85);

    Ok(())
}

#[test]
fn test_fraudulent_transactions_show_unusual_hours() -> Result<()> {
    let mut generator = SyntheticGenerator::new(seeded_config(4_000, 1.0, 17))?;
    let transactions = generator.generate()?;

    let unusual = transactions.iter()
        .filter(|transaction| tables::UNUSUAL_HOURS.contains(&transaction.timestamp.hour()))
        .count();

    // 30% are shifted, and 8/24 of the remainder already fall in the window.
    let expected = 0.3 + 0.7 * (8.0 / 24.0);
    let observed = unusual as f64 / transactions.len() as f64;

    assert!((observed - expected).abs() < 0.05, "observed unusual hour share {observed}");

    Ok(())
}

#[test]
fn test_same_seed_produces_identical_datasets() -> Result<()> {
    let first = SyntheticGenerator::new(seeded_config(500, 0.1, 21))?.generate()?;
    let second = SyntheticGenerator::new(seeded_config(500, 0.1, 21))?.generate()?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_location_weights_split_mass_between_tiers() {
    let fraud: Vec<f64> = tables::location_weights(true).map(|(_, weight)| weight).collect();
    let normal: Vec<f64> = tables::location_weights(false).map(|(_, weight)| weight).collect();

    assert_eq!(fraud.len(), PRIMARY_LOCATIONS.len() + SECONDARY_LOCATIONS.len());
    assert!((fraud.iter().take(5).sum::<f64>() - 10.0).abs() < 1e-9);
    assert!((normal.iter().take(5).sum::<f64>() - 95.0).abs() < 1e-9);
    assert!((normal.iter().skip(5).sum::<f64>() - 5.0).abs() < 1e-9);
}

#[test]
fn test_invalid_configurations_are_rejected() -> Result<()> {
    let invalid_rate = GeneratorConfig { fraud_rate: 1.5, ..GeneratorConfig::default() };
    assert!(matches!(SyntheticGenerator::new(invalid_rate), Err(GeneratorError::InvalidFraudRate(_))));

    let no_records = GeneratorConfig { num_records: 0, ..GeneratorConfig::default() };
    assert!(matches!(SyntheticGenerator::new(no_records), Err(GeneratorError::NoRecords)));

    let reversed = GeneratorConfig {
        start: timestamp::parse("2025-01-01 00:00:00")?,
        end: timestamp::parse("2024-01-01 00:00:00")?,
        ..GeneratorConfig::default()
    };
    assert!(matches!(SyntheticGenerator::new(reversed), Err(GeneratorError::InvalidDateRange { .. })));

    Ok(())
}

#[test]
fn test_summary_reports_counts_and_percentage() {
    let summary = GenerationSummary { total: 20_000, fraudulent: 300 };

    assert_eq!(
        summary.to_string(),
        "Synthetic financial transactions dataset generated with 20000 records.\nFraudulent transactions: 300 (1.50%)"
    );
}
