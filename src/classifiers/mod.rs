mod errors;
mod knn;
mod perceptron;
mod svm;
mod tree;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

pub use errors::ModelError;
pub use knn::{KNearestNeighbors, KnnParams};
pub use perceptron::{Perceptron, PerceptronParams};
pub use svm::{Kernel, Svm, SvmParams};
pub use tree::{DecisionTree, TreeParams};

/// A supervised classifier over dense `f64` rows and `usize` class labels.
pub trait Classifier: Send + Sync {
    fn name(&self) -> &'static str;

    fn fit(&mut self, rows: &[Vec<f64>], labels: &[usize]) -> Result<(), ModelError>;

    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<usize>, ModelError>;

    /// Sorted distinct labels seen during fitting.
    fn classes(&self) -> &[usize];
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum ClassifierKind {
    Svm,
    Knn,
    Perceptron,
    DecisionTree
}

impl ClassifierKind {
    pub const ALL: [ClassifierKind; 4] = [
        ClassifierKind::Svm,
        ClassifierKind::Knn,
        ClassifierKind::Perceptron,
        ClassifierKind::DecisionTree
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassifierKind::Svm => "svm",
            ClassifierKind::Knn => "knn",
            ClassifierKind::Perceptron => "perceptron",
            ClassifierKind::DecisionTree => "decision-tree"
        }
    }
}

impl Display for ClassifierKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for ClassifierKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ClassifierKind::ALL.into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| format!("Unknown classifier '{value}'"))
    }
}

/// Hyper-parameters for every classifier kind.
#[derive(Debug, Clone, Default)]
pub struct ClassifierSettings {
    pub svm: SvmParams,
    pub knn: KnnParams,
    pub perceptron: PerceptronParams,
    pub tree: TreeParams
}

impl ClassifierSettings {
    pub fn build(&self, kind: ClassifierKind) -> Box<dyn Classifier> {
        match kind {
            ClassifierKind::Svm => Box::new(Svm::new(self.svm.clone())),
            ClassifierKind::Knn => Box::new(KNearestNeighbors::new(self.knn.clone())),
            ClassifierKind::Perceptron => Box::new(Perceptron::new(self.perceptron.clone())),
            ClassifierKind::DecisionTree => Box::new(DecisionTree::new(self.tree.clone()))
        }
    }
}

/// Checks the training set shape and returns its width and sorted classes.
fn validate_training(classifier: &'static str, rows: &[Vec<f64>], labels: &[usize]) -> Result<(usize, Vec<usize>), ModelError> {
    let Some(first) = rows.first() else {
        return Err(ModelError::EmptyTrainingSet(classifier))
    };

    if rows.len() != labels.len() {
        return Err(ModelError::LabelCountMismatch { classifier, rows: rows.len(), labels: labels.len() })
    }

    let width = first.len();
    check_width(classifier, width, rows)?;

    let mut classes = labels.to_vec();
    classes.sort_unstable();
    classes.dedup();

    Ok((width, classes))
}

fn check_width(classifier: &'static str, width: usize, rows: &[Vec<f64>]) -> Result<(), ModelError> {
    match rows.iter().find(|row| row.len() != width) {
        Some(row) => Err(ModelError::dimension_mismatch(classifier, width, row.len())),
        None => Ok(())
    }
}

/// Maps a two-class problem onto `-1.0` / `+1.0` targets.
#[derive(Debug, Clone, Copy)]
struct BinaryLabels {
    negative: usize,
    positive: usize
}

impl BinaryLabels {
    fn from_classes(classifier: &'static str, classes: &[usize]) -> Result<Self, ModelError> {
        match classes {
            [only] => Ok(Self { negative: *only, positive: *only }),
            [negative, positive] => Ok(Self { negative: *negative, positive: *positive }),
            _ => Err(ModelError::UnsupportedClassCount { classifier, found: classes.len() })
        }
    }

    fn is_single_class(&self) -> bool {
        self.negative == self.positive
    }

    fn target(&self, label: usize) -> f64 {
        if label == self.positive && !self.is_single_class() { 1.0 } else { -1.0 }
    }

    fn label(&self, decision: f64) -> usize {
        if decision > 0.0 { self.positive } else { self.negative }
    }
}

fn dot(left: &[f64], right: &[f64]) -> f64 {
    left.iter().zip(right).map(|(a, b)| a * b).sum()
}

fn squared_distance(left: &[f64], right: &[f64]) -> f64 {
    left.iter().zip(right).map(|(a, b)| (a - b).powi(2)).sum()
}
