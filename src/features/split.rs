use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::features::{FeatureError, FeatureMatrix, StandardScaler};

#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Share of rows held out for evaluation.
    pub test_fraction: f64,
    pub seed: u64,
    /// Preserve class proportions in both partitions.
    pub stratify: bool,
    /// Standardize features with statistics from the training rows.
    pub standardize: bool
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            seed: 0,
            stratify: true,
            standardize: false
        }
    }
}

#[derive(Debug, Clone)]
pub struct FeatureSplit {
    pub train: FeatureMatrix,
    pub test: FeatureMatrix
}

/// Partitions the matrix into training and test rows.
///
/// With stratification every class with at least two rows contributes to
/// both partitions. Results are deterministic for a given seed.
pub fn train_test_split(matrix: &FeatureMatrix, config: &SplitConfig) -> Result<FeatureSplit, FeatureError> {
    if !(config.test_fraction > 0.0 && config.test_fraction < 1.0) {
        return Err(FeatureError::InvalidTestFraction(config.test_fraction));
    }

    if matrix.len() < 2 {
        return Err(FeatureError::NotEnoughRows(matrix.len()));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut train_indices = Vec::new();
    let mut test_indices = Vec::new();

    let groups: Vec<Vec<usize>> = if config.stratify {
        let mut by_class = BTreeMap::<usize, Vec<usize>>::new();
        for (index, label) in matrix.labels.iter().enumerate() {
            by_class.entry(*label).or_default().push(index);
        }
        by_class.into_values().collect()
    } else {
        vec![(0..matrix.len()).collect()]
    };

    for mut group in groups {
        group.shuffle(&mut rng);

        let test_count = held_out_count(group.len(), config.test_fraction);
        let (test, train) = group.split_at(test_count);

        test_indices.extend_from_slice(test);
        train_indices.extend_from_slice(train);
    }

    train_indices.shuffle(&mut rng);
    test_indices.shuffle(&mut rng);

    let mut split = FeatureSplit {
        train: matrix.select(&train_indices),
        test: matrix.select(&test_indices)
    };

    if config.standardize {
        let scaler = StandardScaler::fit(&split.train)?;
        scaler.transform(&mut split.train)?;
        scaler.transform(&mut split.test)?;
    }

    debug!("Split {} rows into {} training and {} test rows", matrix.len(), split.train.len(), split.test.len());

    Ok(split)
}

fn held_out_count(group_len: usize, test_fraction: f64) -> usize {
    if group_len < 2 {
        return 0;
    }

    let count = (group_len as f64 * test_fraction).round() as usize;
    count.clamp(1, group_len - 1)
}
