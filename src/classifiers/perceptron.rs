use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::classifiers::{check_width, dot, validate_training, BinaryLabels, Classifier, ModelError};

const NAME: &str = "perceptron";

#[derive(Debug, Clone)]
pub struct PerceptronParams {
    pub max_epochs: usize,
    pub seed: u64
}

impl Default for PerceptronParams {
    fn default() -> Self {
        Self { max_epochs: 1000, seed: 0 }
    }
}

struct FittedPerceptron {
    width: usize,
    labels: BinaryLabels,
    weights: Vec<f64>,
    bias: f64
}

/// Online perceptron with unit learning rate and shuffled passes.
pub struct Perceptron {
    params: PerceptronParams,
    classes: Vec<usize>,
    fitted: Option<FittedPerceptron>
}

impl Perceptron {
    pub fn new(params: PerceptronParams) -> Self {
        Self {
            params,
            classes: Vec::new(),
            fitted: None
        }
    }
}

impl Classifier for Perceptron {
    fn name(&self) -> &'static str {
        NAME
    }

    fn fit(&mut self, rows: &[Vec<f64>], labels: &[usize]) -> Result<(), ModelError> {
        let (width, classes) = validate_training(NAME, rows, labels)?;
        let binary = BinaryLabels::from_classes(NAME, &classes)?;

        let mut weights = vec![0.0; width];
        let mut bias = 0.0;
        let mut order: Vec<usize> = (0..rows.len()).collect();
        let mut rng = StdRng::seed_from_u64(self.params.seed);

        for epoch in 1..=self.params.max_epochs {
            order.shuffle(&mut rng);
            let mut mistakes = 0;

            for &index in &order {
                let target = binary.target(labels[index]);

                if target * (dot(&weights, &rows[index]) + bias) <= 0.0 {
                    for (weight, value) in weights.iter_mut().zip(&rows[index]) {
                        *weight += target * value;
                    }
                    bias += target;
                    mistakes += 1;
                }
            }

            if mistakes == 0 {
                debug!("Perceptron converged after {epoch} epochs");
                break;
            }
        }

        self.classes = classes;
        self.fitted = Some(FittedPerceptron { width, labels: binary, weights, bias });

        Ok(())
    }

    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<usize>, ModelError> {
        let fitted = self.fitted.as_ref().ok_or(ModelError::NotFitted(NAME))?;
        check_width(NAME, fitted.width, rows)?;

        if fitted.labels.is_single_class() {
            return Ok(vec![fitted.labels.negative; rows.len()]);
        }

        Ok(rows.iter()
            .map(|row| fitted.labels.label(dot(&fitted.weights, row) + fitted.bias))
            .collect())
    }

    fn classes(&self) -> &[usize] {
        &self.classes
    }
}
