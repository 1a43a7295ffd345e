use std::cmp::Ordering;

use crate::classifiers::{check_width, squared_distance, validate_training, Classifier, ModelError};

const NAME: &str = "knn";

#[derive(Debug, Clone)]
pub struct KnnParams {
    pub k: usize,
    /// Minkowski power; `2.0` is the Euclidean distance.
    pub p: f64
}

impl Default for KnnParams {
    fn default() -> Self {
        Self { k: 4, p: 2.0 }
    }
}

/// Brute-force k-nearest-neighbours with uniform votes.
pub struct KNearestNeighbors {
    params: KnnParams,
    rows: Vec<Vec<f64>>,
    labels: Vec<usize>,
    classes: Vec<usize>,
    width: Option<usize>
}

impl KNearestNeighbors {
    pub fn new(params: KnnParams) -> Self {
        Self {
            params,
            rows: Vec::new(),
            labels: Vec::new(),
            classes: Vec::new(),
            width: None
        }
    }

    /// Distance used only for ranking, so the final root is skipped.
    fn distance(&self, left: &[f64], right: &[f64]) -> f64 {
        if self.params.p == 2.0 {
            return squared_distance(left, right);
        }

        left.iter().zip(right).map(|(a, b)| (a - b).abs().powf(self.params.p)).sum()
    }

    fn vote(&self, row: &[f64]) -> usize {
        let mut neighbours: Vec<(f64, usize)> = self.rows.iter()
            .zip(&self.labels)
            .map(|(candidate, label)| (self.distance(candidate, row), *label))
            .collect();

        let k = self.params.k.min(neighbours.len());
        let by_distance = |a: &(f64, usize), b: &(f64, usize)| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal);

        if k < neighbours.len() {
            neighbours.select_nth_unstable_by(k - 1, by_distance);
        }

        let mut counts = vec![0usize; self.classes.len()];
        for (_, label) in &neighbours[..k] {
            if let Ok(position) = self.classes.binary_search(label) {
                counts[position] += 1;
            }
        }

        // Ties go to the smallest label.
        let mut best = 0;
        for (position, count) in counts.iter().enumerate() {
            if *count > counts[best] {
                best = position;
            }
        }

        self.classes[best]
    }
}

impl Classifier for KNearestNeighbors {
    fn name(&self) -> &'static str {
        NAME
    }

    fn fit(&mut self, rows: &[Vec<f64>], labels: &[usize]) -> Result<(), ModelError> {
        if self.params.k == 0 {
            return Err(ModelError::invalid_parameter(NAME, "k must be greater than zero"));
        }

        if !(self.params.p >= 1.0) {
            return Err(ModelError::invalid_parameter(NAME, format!("p must be at least 1, got {}", self.params.p)));
        }

        let (width, classes) = validate_training(NAME, rows, labels)?;

        self.rows = rows.to_vec();
        self.labels = labels.to_vec();
        self.classes = classes;
        self.width = Some(width);

        Ok(())
    }

    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<usize>, ModelError> {
        let width = self.width.ok_or(ModelError::NotFitted(NAME))?;
        check_width(NAME, width, rows)?;

        Ok(rows.iter().map(|row| self.vote(row)).collect())
    }

    fn classes(&self) -> &[usize] {
        &self.classes
    }
}
