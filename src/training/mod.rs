mod engine;
mod errors;
mod evaluation_storage;

use crate::metrics::ConfusionMatrix;

pub use engine::TrainingEngine;
pub use errors::TrainingError;
pub use evaluation_storage::EvaluationStorage;

pub trait Storage: Send + Sync + 'static {
    fn load(&self, classifier: &str) -> Option<Evaluation>;
    fn save(&self, evaluation: Evaluation);
}

/// Held-out performance of one fitted classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub classifier: &'static str,
    /// Sorted classes the classifier saw while fitting.
    pub classes: Vec<usize>,
    pub confusion: ConfusionMatrix,
    pub accuracy: f64,
    pub train_size: usize,
    pub test_size: usize
}

impl Evaluation {
    pub fn new(
        classifier: &'static str,
        classes: Vec<usize>,
        confusion: ConfusionMatrix,
        train_size: usize,
        test_size: usize
    ) -> Self {
        Self {
            classifier,
            classes,
            accuracy: confusion.accuracy(),
            confusion,
            train_size,
            test_size
        }
    }
}
