use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, warn};

use crate::dataset::DatasetError;
use crate::models::Transaction;

/// Streams dataset rows off a blocking task into memory.
pub struct DatasetReader {
    backpressure: usize
}

impl DatasetReader {
    pub fn new() -> Self {
        Self {
            backpressure: 256
        }
    }

    #[cfg(test)]
    pub fn with_backpressure(mut self, backpressure: usize) -> Self {
        self.backpressure = backpressure.max(1);
        self
    }

    /// Reads every well-formed row of the dataset.
    ///
    /// Malformed rows are logged and skipped; a file that cannot be opened
    /// is an error.
    pub async fn read(&self, path: &Path) -> Result<Vec<Transaction>, DatasetError> {
        let (sender, mut receiver) = mpsc::channel::<Transaction>(self.backpressure);
        let csv_handle = self.spawn_csv_reader(path.to_path_buf(), sender);

        let mut transactions = Vec::new();

        while let Some(transaction) = receiver.recv().await {
            transactions.push(transaction);
        }

        let skipped = csv_handle.await
            .map_err(|error| DatasetError::Ingestion(error.to_string()))??;

        debug!("Read {} transactions, skipped {} malformed rows", transactions.len(), skipped);

        Ok(transactions)
    }

    fn spawn_csv_reader(&self, path: PathBuf, sender: mpsc::Sender<Transaction>) -> JoinHandle<Result<usize, DatasetError>> {
        spawn_blocking(move || {
            let file = File::open(&path).map_err(|error| DatasetError::open(&path, error))?;

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .from_reader(BufReader::new(file));

            let mut skipped = 0;

            for result in reader.deserialize::<Transaction>() {
                match result {
                    Ok(transaction) => {
                        if sender.blocking_send(transaction).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        skipped += 1;
                        warn!("CSV deserialization error: {error}");
                    }
                }
            }

            Ok(skipped)
        })
    }
}

impl Default for DatasetReader {
    fn default() -> Self {
        Self::new()
    }
}
