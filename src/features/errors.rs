use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("Test fraction must be within (0, 1), got [{0}]")]
    InvalidTestFraction(f64),
    #[error("At least two rows are required to split, got [{0}]")]
    NotEnoughRows(usize),
    #[error("Scaler was fitted on [{expected}] features but received [{found}]")]
    WidthMismatch {
        expected: usize,
        found: usize
    },
    #[error("Scaler cannot be fitted on an empty matrix")]
    EmptyMatrix
}
