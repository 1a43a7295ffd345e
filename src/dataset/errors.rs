use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Error opening dataset at path [{path}]: {source}")]
    Open {
        path: PathBuf,
        source: io::Error
    },
    #[error("Dataset I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Dataset CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Dataset ingestion task failed: {0}")]
    Ingestion(String)
}

impl DatasetError {
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open { path: path.into(), source }
    }
}
