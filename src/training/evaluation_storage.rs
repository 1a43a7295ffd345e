use std::sync::Arc;

use dashmap::iter::Iter;
use dashmap::DashMap;

use crate::training::{Evaluation, Storage};

pub struct EvaluationStorage {
    cache: Arc<DashMap<&'static str, Evaluation>>
}

impl EvaluationStorage {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(DashMap::new())
        }
    }

    pub fn iter(&self) -> Iter<'_, &'static str, Evaluation> {
        self.cache.iter()
    }

    /// Snapshot of every stored evaluation ordered by classifier name.
    pub fn sorted(&self) -> Vec<Evaluation> {
        let mut evaluations: Vec<Evaluation> = self.iter().map(|entry| entry.value().clone()).collect();
        evaluations.sort_by(|left, right| left.classifier.cmp(right.classifier));
        evaluations
    }
}

impl Default for EvaluationStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for EvaluationStorage {
    fn load(&self, classifier: &str) -> Option<Evaluation> {
        self.cache.get(classifier).map(|entry| entry.value().clone())
    }

    fn save(&self, evaluation: Evaluation) {
        self.cache.insert(evaluation.classifier, evaluation);
    }
}
