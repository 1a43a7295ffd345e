use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::classifiers::{check_width, dot, squared_distance, validate_training, BinaryLabels, Classifier, ModelError};

const NAME: &str = "svm";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kernel {
    Linear,
    Rbf { gamma: f64 }
}

impl Kernel {
    fn evaluate(&self, left: &[f64], right: &[f64]) -> f64 {
        match self {
            Kernel::Linear => dot(left, right),
            Kernel::Rbf { gamma } => (-gamma * squared_distance(left, right)).exp()
        }
    }
}

#[derive(Debug, Clone)]
pub struct SvmParams {
    pub kernel: Kernel,
    /// Inverse regularization strength.
    pub c: f64,
    /// Passes over the training set, in expectation.
    pub epochs: usize,
    pub seed: u64
}

impl Default for SvmParams {
    fn default() -> Self {
        Self {
            kernel: Kernel::Rbf { gamma: 1e-6 },
            c: 1.0,
            epochs: 2,
            seed: 0
        }
    }
}

struct SupportVector {
    row: Vec<f64>,
    coefficient: f64
}

struct FittedSvm {
    width: usize,
    labels: BinaryLabels,
    support: Vec<SupportVector>,
    scale: f64
}

/// Support vector machine trained with the kernelized Pegasos solver.
///
/// Each step samples one training row and increments its coefficient when
/// the current decision value violates the margin. The regularization
/// strength follows `lambda = 1 / (c * n)`.
pub struct Svm {
    params: SvmParams,
    classes: Vec<usize>,
    fitted: Option<FittedSvm>
}

impl Svm {
    pub fn new(params: SvmParams) -> Self {
        Self {
            params,
            classes: Vec::new(),
            fitted: None
        }
    }

    #[cfg(test)]
    pub fn support_vector_count(&self) -> usize {
        self.fitted.as_ref().map_or(0, |fitted| fitted.support.len())
    }

    fn validate_params(&self) -> Result<(), ModelError> {
        if !(self.params.c > 0.0) {
            return Err(ModelError::invalid_parameter(NAME, format!("c must be positive, got {}", self.params.c)));
        }

        if let Kernel::Rbf { gamma } = self.params.kernel {
            if !(gamma > 0.0) {
                return Err(ModelError::invalid_parameter(NAME, format!("gamma must be positive, got {gamma}")));
            }
        }

        if self.params.epochs == 0 {
            return Err(ModelError::invalid_parameter(NAME, "epochs must be greater than zero"));
        }

        Ok(())
    }

    fn decision(&self, fitted: &FittedSvm, row: &[f64]) -> f64 {
        let kernel = self.params.kernel;

        fitted.support.iter()
            .map(|vector| vector.coefficient * kernel.evaluate(&vector.row, row))
            .sum::<f64>() * fitted.scale
    }
}

impl Classifier for Svm {
    fn name(&self) -> &'static str {
        NAME
    }

    fn fit(&mut self, rows: &[Vec<f64>], labels: &[usize]) -> Result<(), ModelError> {
        self.validate_params()?;

        let (width, classes) = validate_training(NAME, rows, labels)?;
        let binary = BinaryLabels::from_classes(NAME, &classes)?;
        let targets: Vec<f64> = labels.iter().map(|label| binary.target(*label)).collect();

        let count = rows.len();
        let lambda = 1.0 / (self.params.c * count as f64);
        let steps = self.params.epochs.saturating_mul(count);
        let kernel = self.params.kernel;
        let mut rng = StdRng::seed_from_u64(self.params.seed);

        let mut alphas = vec![0u32; count];
        let mut active: Vec<usize> = Vec::new();

        for step in 1..=steps {
            let index = rng.random_range(0..count);
            let row = &rows[index];

            let sum: f64 = active.iter()
                .map(|&other| f64::from(alphas[other]) * targets[other] * kernel.evaluate(&rows[other], row))
                .sum();

            if targets[index] * sum / (lambda * step as f64) < 1.0 {
                if alphas[index] == 0 {
                    active.push(index);
                }
                alphas[index] += 1;
            }
        }

        let support: Vec<SupportVector> = active.into_iter()
            .map(|index| SupportVector {
                row: rows[index].clone(),
                coefficient: f64::from(alphas[index]) * targets[index]
            })
            .collect();

        debug!("SVM fitted with {} support vectors over {} steps", support.len(), steps);

        self.classes = classes;
        self.fitted = Some(FittedSvm {
            width,
            labels: binary,
            support,
            scale: 1.0 / (lambda * steps as f64)
        });

        Ok(())
    }

    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<usize>, ModelError> {
        let fitted = self.fitted.as_ref().ok_or(ModelError::NotFitted(NAME))?;
        check_width(NAME, fitted.width, rows)?;

        if fitted.labels.is_single_class() {
            return Ok(vec![fitted.labels.negative; rows.len()]);
        }

        Ok(rows.iter().map(|row| fitted.labels.label(self.decision(fitted, row))).collect())
    }

    fn classes(&self) -> &[usize] {
        &self.classes
    }
}
