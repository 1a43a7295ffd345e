use crate::features::{FeatureError, FeatureMatrix};

/// Standardizes each column to zero mean and unit variance.
#[derive(Debug, Clone, Default)]
pub struct StandardScaler {
    means: Vec<f64>,
    scales: Vec<f64>
}

impl StandardScaler {
    pub fn fit(matrix: &FeatureMatrix) -> Result<Self, FeatureError> {
        if matrix.is_empty() {
            return Err(FeatureError::EmptyMatrix);
        }

        let width = matrix.width();
        let count = matrix.len() as f64;

        let mut means = vec![0.0; width];
        for row in &matrix.rows {
            for (mean, value) in means.iter_mut().zip(row) {
                *mean += value / count;
            }
        }

        let mut variances = vec![0.0; width];
        for row in &matrix.rows {
            for ((variance, mean), value) in variances.iter_mut().zip(&means).zip(row) {
                *variance += (value - mean).powi(2) / count;
            }
        }

        // Constant columns are centred but left unscaled.
        let scales = variances.into_iter()
            .map(|variance| if variance > f64::EPSILON { variance.sqrt() } else { 1.0 })
            .collect();

        Ok(Self { means, scales })
    }

    pub fn transform(&self, matrix: &mut FeatureMatrix) -> Result<(), FeatureError> {
        for row in &mut matrix.rows {
            if row.len() != self.means.len() {
                return Err(FeatureError::WidthMismatch { expected: self.means.len(), found: row.len() });
            }

            for ((value, mean), scale) in row.iter_mut().zip(&self.means).zip(&self.scales) {
                *value = (*value - mean) / scale;
            }
        }

        Ok(())
    }
}
