use std::cmp::Ordering;

use tracing::debug;

use crate::classifiers::{check_width, validate_training, Classifier, ModelError};

const NAME: &str = "decision-tree";

#[derive(Debug, Clone)]
pub struct TreeParams {
    /// Unlimited when `None`.
    pub max_depth: Option<usize>,
    pub min_samples_split: usize
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_depth: None,
            min_samples_split: 2
        }
    }
}

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        class: usize
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize
    }
}

struct BestSplit {
    feature: usize,
    threshold: f64,
    impurity: f64
}

struct FittedTree {
    width: usize,
    nodes: Vec<Node>
}

/// CART decision tree using Gini impurity.
///
/// Nodes live in an arena and are grown from an explicit work stack, so deep
/// trees on large datasets do not recurse.
pub struct DecisionTree {
    params: TreeParams,
    classes: Vec<usize>,
    fitted: Option<FittedTree>
}

impl DecisionTree {
    pub fn new(params: TreeParams) -> Self {
        Self {
            params,
            classes: Vec::new(),
            fitted: None
        }
    }

    /// Depth of the fitted tree; a single leaf has depth zero.
    pub fn depth(&self) -> usize {
        let Some(fitted) = &self.fitted else {
            return 0;
        };

        let mut deepest = 0;
        let mut stack = vec![(0usize, 0usize)];

        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);

            if let Node::Split { left, right, .. } = fitted.nodes[node] {
                stack.push((left, depth + 1));
                stack.push((right, depth + 1));
            }
        }

        deepest
    }

    fn class_counts(&self, labels: &[usize], indices: &[usize]) -> Vec<usize> {
        let mut counts = vec![0usize; self.classes.len()];

        for index in indices {
            if let Ok(position) = self.classes.binary_search(&labels[*index]) {
                counts[position] += 1;
            }
        }

        counts
    }

    fn majority(&self, counts: &[usize]) -> usize {
        let mut best = 0;
        for (position, count) in counts.iter().enumerate() {
            if *count > counts[best] {
                best = position;
            }
        }

        self.classes[best]
    }

    fn best_split(&self, rows: &[Vec<f64>], labels: &[usize], indices: &[usize], width: usize) -> Option<BestSplit> {
        let total = indices.len() as f64;
        let parent_counts = self.class_counts(labels, indices);
        let mut best: Option<BestSplit> = None;
        let mut sorted = indices.to_vec();

        for feature in 0..width {
            sorted.sort_by(|a, b| rows[*a][feature].partial_cmp(&rows[*b][feature]).unwrap_or(Ordering::Equal));

            let mut left_counts = vec![0usize; self.classes.len()];

            for position in 0..sorted.len() - 1 {
                let index = sorted[position];
                if let Ok(class) = self.classes.binary_search(&labels[index]) {
                    left_counts[class] += 1;
                }

                let current = rows[index][feature];
                let next = rows[sorted[position + 1]][feature];

                if next <= current {
                    continue;
                }

                let left_total = (position + 1) as f64;
                let right_total = total - left_total;
                let right_counts = parent_counts.iter().zip(&left_counts).map(|(all, left)| all - left);

                let impurity = left_total / total * gini(left_counts.iter().copied(), left_total)
                    + right_total / total * gini(right_counts, right_total);

                if best.as_ref().is_none_or(|candidate| impurity < candidate.impurity) {
                    best = Some(BestSplit {
                        feature,
                        threshold: current + (next - current) / 2.0,
                        impurity
                    });
                }
            }
        }

        best
    }
}

fn gini(counts: impl Iterator<Item = usize>, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }

    1.0 - counts.map(|count| (count as f64 / total).powi(2)).sum::<f64>()
}

impl Classifier for DecisionTree {
    fn name(&self) -> &'static str {
        NAME
    }

    fn fit(&mut self, rows: &[Vec<f64>], labels: &[usize]) -> Result<(), ModelError> {
        if self.params.min_samples_split < 2 {
            return Err(ModelError::invalid_parameter(NAME, "min_samples_split must be at least 2"));
        }

        let (width, classes) = validate_training(NAME, rows, labels)?;
        self.classes = classes;

        let mut nodes = vec![Node::Leaf { class: self.classes[0] }];
        let mut stack = vec![(0usize, (0..rows.len()).collect::<Vec<usize>>(), 0usize)];

        while let Some((node, indices, depth)) = stack.pop() {
            let counts = self.class_counts(labels, &indices);
            let majority = self.majority(&counts);

            let is_pure = counts.iter().filter(|count| **count > 0).count() <= 1;
            let at_max_depth = self.params.max_depth.is_some_and(|max_depth| depth >= max_depth);

            if is_pure || at_max_depth || indices.len() < self.params.min_samples_split {
                nodes[node] = Node::Leaf { class: majority };
                continue;
            }

            let Some(split) = self.best_split(rows, labels, &indices, width) else {
                nodes[node] = Node::Leaf { class: majority };
                continue;
            };

            let (left_indices, right_indices): (Vec<usize>, Vec<usize>) = indices.iter()
                .copied()
                .partition(|index| rows[*index][split.feature] <= split.threshold);

            if left_indices.is_empty() || right_indices.is_empty() {
                nodes[node] = Node::Leaf { class: majority };
                continue;
            }

            let left = nodes.len();
            let right = left + 1;
            nodes.push(Node::Leaf { class: majority });
            nodes.push(Node::Leaf { class: majority });

            nodes[node] = Node::Split {
                feature: split.feature,
                threshold: split.threshold,
                left,
                right
            };

            stack.push((left, left_indices, depth + 1));
            stack.push((right, right_indices, depth + 1));
        }

        let node_count = nodes.len();
        self.fitted = Some(FittedTree { width, nodes });

        debug!("Decision tree fitted with {} nodes and depth {}", node_count, self.depth());

        Ok(())
    }

    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<usize>, ModelError> {
        let fitted = self.fitted.as_ref().ok_or(ModelError::NotFitted(NAME))?;
        check_width(NAME, fitted.width, rows)?;

        let predictions = rows.iter()
            .map(|row| {
                let mut node = 0;

                loop {
                    match fitted.nodes[node] {
                        Node::Leaf { class } => break class,
                        Node::Split { feature, threshold, left, right } => {
                            node = if row[feature] <= threshold { left } else { right };
                        }
                    }
                }
            })
            .collect();

        Ok(predictions)
    }

    fn classes(&self) -> &[usize] {
        &self.classes
    }
}
