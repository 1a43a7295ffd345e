use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Classifier [{0}] cannot be fitted on an empty training set")]
    EmptyTrainingSet(&'static str),
    #[error("Classifier [{classifier}] received [{rows}] rows but [{labels}] labels")]
    LabelCountMismatch {
        classifier: &'static str,
        rows: usize,
        labels: usize
    },
    #[error("Classifier [{classifier}] expects rows of width [{expected}] but received [{found}]")]
    DimensionMismatch {
        classifier: &'static str,
        expected: usize,
        found: usize
    },
    #[error("Classifier [{0}] must be fitted before predicting")]
    NotFitted(&'static str),
    #[error("Classifier [{classifier}] supports two classes but the training set has [{found}]")]
    UnsupportedClassCount {
        classifier: &'static str,
        found: usize
    },
    #[error("Invalid parameter for classifier [{classifier}]: {message}")]
    InvalidParameter {
        classifier: &'static str,
        message: String
    }
}

impl ModelError {
    pub fn dimension_mismatch(classifier: &'static str, expected: usize, found: usize) -> Self {
        Self::DimensionMismatch { classifier, expected, found }
    }

    pub fn invalid_parameter(classifier: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter { classifier, message: message.into() }
    }
}
