use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Received [{truth}] true labels but [{predicted}] predictions")]
    LengthMismatch {
        truth: usize,
        predicted: usize
    },
    #[error("Label [{0}] is not a binary class")]
    NonBinaryLabel(usize)
}
