use std::path::PathBuf;

use thiserror::Error;
use tokio::task::JoinError;

use crate::classifiers::ModelError;
use crate::dataset::DatasetError;
use crate::features::FeatureError;
use crate::metrics::MetricsError;

#[derive(Debug, Error)]
pub enum TrainingError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Features(#[from] FeatureError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Metrics(#[from] MetricsError),
    #[error("Training task did not complete: {0}")]
    Task(#[from] JoinError),
    #[error("Dataset at [{0}] contains no transactions")]
    EmptyDataset(PathBuf)
}
