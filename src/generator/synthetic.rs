use std::fmt::{self, Display, Formatter};

use chrono::{NaiveDateTime, TimeDelta};
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, LogNormal};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::generator::tables::{self, CategoryProfile, MERCHANT_PROFILES};
use crate::generator::{GeneratorConfig, GeneratorError};
use crate::models::{Location, Transaction};
use crate::types::{CardType, TransactionId};

const PROGRESS_INTERVAL: usize = 10_000;

/// Sampling tables conditioned on the fraud flag.
struct LabelProfile {
    categories: WeightedIndex<f64>,
    locations: WeightedIndex<f64>,
    location_choices: Vec<Location>,
    amounts: LogNormal<f64>,
    amount_floor: f64
}

impl LabelProfile {
    fn new(is_fraud: bool) -> Result<Self, GeneratorError> {
        let categories = WeightedIndex::new(MERCHANT_PROFILES.iter().map(|profile| profile.weight(is_fraud)))
            .map_err(GeneratorError::distribution)?;

        let (location_choices, location_weights): (Vec<Location>, Vec<f64>) = tables::location_weights(is_fraud).unzip();
        let locations = WeightedIndex::new(location_weights).map_err(GeneratorError::distribution)?;

        let (mu, sigma, amount_floor) = if is_fraud {
            (tables::FRAUD_AMOUNT_MU, tables::FRAUD_AMOUNT_SIGMA, tables::FRAUD_AMOUNT_FLOOR)
        } else {
            (tables::NORMAL_AMOUNT_MU, tables::NORMAL_AMOUNT_SIGMA, tables::NORMAL_AMOUNT_FLOOR)
        };

        let amounts = LogNormal::new(mu, sigma).map_err(GeneratorError::distribution)?;

        Ok(Self {
            categories,
            locations,
            location_choices,
            amounts,
            amount_floor
        })
    }
}

/// Weighted-random generator of labeled transactions.
pub struct SyntheticGenerator {
    config: GeneratorConfig,
    rng: StdRng,
    normal: LabelProfile,
    fraud: LabelProfile
}

impl SyntheticGenerator {
    /// Validates the configuration and prepares the sampling tables.
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng()
        };

        Ok(Self {
            rng,
            normal: LabelProfile::new(false)?,
            fraud: LabelProfile::new(true)?,
            config
        })
    }

    /// Generates the configured number of records, sorted by timestamp.
    ///
    /// Identifiers are assigned in generation order, so after sorting they
    /// form a permutation of `1..=num_records` rather than a sequence.
    pub fn generate(&mut self) -> Result<Vec<Transaction>, GeneratorError> {
        info!(
            "Generating {} transactions with fraud rate {}",
            self.config.num_records, self.config.fraud_rate
        );

        let mut transactions = Vec::with_capacity(self.config.num_records);

        for index in 0..self.config.num_records {
            let transaction_id = TransactionId::try_from(index + 1)
                .map_err(|_| GeneratorError::TooManyRecords(self.config.num_records))?;

            transactions.push(self.generate_one(transaction_id)?);

            if (index + 1) % PROGRESS_INTERVAL == 0 {
                debug!("Generated {} of {} transactions", index + 1, self.config.num_records);
            }
        }

        transactions.sort_by_key(|transaction| transaction.timestamp);

        Ok(transactions)
    }

    fn generate_one(&mut self, transaction_id: TransactionId) -> Result<Transaction, GeneratorError> {
        let is_fraud = self.rng.random::<f64>() < self.config.fraud_rate;

        let mut timestamp = self.random_timestamp()?;
        let amount = self.random_amount(is_fraud)?;
        let card_type = CardType::ALL[self.rng.random_range(0..CardType::ALL.len())];
        let profile = self.choose_category(is_fraud);
        let merchant_name = self.merchant_name(profile)?;
        let location = self.choose_location(is_fraud);

        if is_fraud && self.rng.random_bool(tables::PROBABILITY_UNUSUAL_HOUR) {
            timestamp = self.shift_to_unusual_hour(timestamp);
        }

        Ok(Transaction {
            transaction_id,
            timestamp,
            amount,
            currency: self.config.currency,
            merchant_name,
            merchant_category: profile.category,
            card_type,
            location_city: location.city.to_string(),
            location_country: location.country.to_string(),
            latitude: location.latitude,
            longitude: location.longitude,
            is_fraud
        })
    }

    fn random_timestamp(&mut self) -> Result<NaiveDateTime, GeneratorError> {
        let span = (self.config.end - self.config.start).num_seconds();
        let offset = self.rng.random_range(0..=span);

        TimeDelta::try_seconds(offset)
            .and_then(|delta| self.config.start.checked_add_signed(delta))
            .ok_or(GeneratorError::TimestampOutOfRange(offset))
    }

    fn random_amount(&mut self, is_fraud: bool) -> Result<Decimal, GeneratorError> {
        let profile = if is_fraud { &self.fraud } else { &self.normal };
        let raw = profile.amounts.sample(&mut self.rng).max(profile.amount_floor);

        Decimal::from_f64(raw)
            .map(|amount| amount.round_dp(2))
            .ok_or(GeneratorError::AmountOutOfRange(raw))
    }

    fn choose_category(&mut self, is_fraud: bool) -> &'static CategoryProfile {
        let profile = if is_fraud { &self.fraud } else { &self.normal };
        let index = profile.categories.sample(&mut self.rng);
        &MERCHANT_PROFILES[index]
    }

    fn merchant_name(&mut self, profile: &'static CategoryProfile) -> Result<String, GeneratorError> {
        let base = profile.names.choose(&mut self.rng)
            .ok_or(GeneratorError::EmptyMerchantTable(profile.category.as_str()))?;
        let suffix = self.rng.random_range(tables::MERCHANT_SUFFIX_MIN..=tables::MERCHANT_SUFFIX_MAX);

        Ok(format!("{base}_{suffix}"))
    }

    fn choose_location(&mut self, is_fraud: bool) -> Location {
        let profile = if is_fraud { &self.fraud } else { &self.normal };
        let index = profile.locations.sample(&mut self.rng);
        profile.location_choices[index]
    }

    /// Moves the time of day into the late-night window, keeping the date.
    fn shift_to_unusual_hour(&mut self, timestamp: NaiveDateTime) -> NaiveDateTime {
        let hour = tables::UNUSUAL_HOURS[self.rng.random_range(0..tables::UNUSUAL_HOURS.len())];
        let minute = self.rng.random_range(0..=59);
        let second = self.rng.random_range(0..=59);

        timestamp.date().and_hms_opt(hour, minute, second).unwrap_or(timestamp)
    }
}

/// Label counts of a generated dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSummary {
    pub total: usize,
    pub fraudulent: usize
}

impl GenerationSummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        Self {
            total: transactions.len(),
            fraudulent: transactions.iter().filter(|transaction| transaction.is_fraud).count()
        }
    }

    pub fn fraud_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0
        }

        self.fraudulent as f64 / self.total as f64 * 100.0
    }
}

impl Display for GenerationSummary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "Synthetic financial transactions dataset generated with {} records.", self.total)?;
        write!(formatter, "Fraudulent transactions: {} ({:.2}%)", self.fraudulent, self.fraud_percentage())
    }
}
