use std::fmt::{self, Display, Formatter};

use crate::metrics::MetricsError;

const CLASSES: [usize; 2] = [0, 1];

/// Binary confusion matrix; rows are true labels, columns predictions.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ConfusionMatrix {
    counts: [[usize; 2]; 2]
}

impl ConfusionMatrix {
    pub fn from_predictions(truth: &[usize], predicted: &[usize]) -> Result<Self, MetricsError> {
        if truth.len() != predicted.len() {
            return Err(MetricsError::LengthMismatch { truth: truth.len(), predicted: predicted.len() });
        }

        let mut counts = [[0usize; 2]; 2];

        for (actual, guess) in truth.iter().zip(predicted) {
            let row = *CLASSES.get(*actual).ok_or(MetricsError::NonBinaryLabel(*actual))?;
            let column = *CLASSES.get(*guess).ok_or(MetricsError::NonBinaryLabel(*guess))?;
            counts[row][column] += 1;
        }

        Ok(Self { counts })
    }

    pub fn true_negatives(&self) -> usize {
        self.counts[0][0]
    }

    pub fn false_positives(&self) -> usize {
        self.counts[0][1]
    }

    pub fn false_negatives(&self) -> usize {
        self.counts[1][0]
    }

    pub fn true_positives(&self) -> usize {
        self.counts[1][1]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    pub fn accuracy(&self) -> f64 {
        ratio(self.true_negatives() + self.true_positives(), self.total())
    }

    /// Precision of the fraud class.
    pub fn precision(&self) -> f64 {
        ratio(self.true_positives(), self.true_positives() + self.false_positives())
    }

    /// Recall of the fraud class.
    pub fn recall(&self) -> f64 {
        ratio(self.true_positives(), self.true_positives() + self.false_negatives())
    }

    pub fn f1(&self) -> f64 {
        let (precision, recall) = (self.precision(), self.recall());

        if precision + recall == 0.0 {
            return 0.0;
        }

        2.0 * precision * recall / (precision + recall)
    }

    /// Labelled grid with true labels down the side and predictions across.
    ///
    /// `display_labels` names the two rows and columns, usually the classes a
    /// classifier saw while fitting. Anything other than two labels falls
    /// back to `0` and `1`.
    pub fn render_table(&self, display_labels: &[usize]) -> String {
        let labels = match display_labels {
            [negative, positive] => [*negative, *positive],
            _ => CLASSES
        };

        let cell_width = self.counts.iter().flatten()
            .map(|count| count.to_string().len())
            .max()
            .unwrap_or(1)
            .max(5);

        let mut table = String::new();
        table.push_str(&format!("{:>12} | {:^width$}\n", "", "Predicted label", width = cell_width * 2 + 3));
        table.push_str(&format!("{:>12} | {:>width$} | {:>width$}\n", "True label", labels[0], labels[1], width = cell_width));
        table.push_str(&format!("{}\n", "-".repeat(15 + cell_width * 2 + 3)));

        for (class, row) in labels.iter().zip(&self.counts) {
            table.push_str(&format!("{:>12} | {:>width$} | {:>width$}\n", class, row[0], row[1], width = cell_width));
        }

        table
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }

    numerator as f64 / denominator as f64
}

impl Display for ConfusionMatrix {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let width = self.counts.iter().flatten()
            .map(|count| count.to_string().len())
            .max()
            .unwrap_or(1);

        write!(
            formatter,
            "[[{:>width$} {:>width$}]\n [{:>width$} {:>width$}]]",
            self.counts[0][0], self.counts[0][1], self.counts[1][0], self.counts[1][1]
        )
    }
}
