use std::fs::{create_dir_all, File};
use std::io::BufWriter;
use std::path::Path;

use csv::WriterBuilder;
use tracing::debug;

use crate::dataset::DatasetError;
use crate::models::Transaction;

pub const COLUMNS: [&str; 12] = [
    "transaction_id",
    "timestamp",
    "amount",
    "currency",
    "merchant_name",
    "merchant_category",
    "card_type",
    "location_city",
    "location_country",
    "latitude",
    "longitude",
    "is_fraud"
];

/// Writes the dataset with a header row, even when there are no transactions,
/// creating parent directories as needed.
pub fn write_transactions(path: &Path, transactions: &[Transaction]) -> Result<(), DatasetError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }

    let file = File::create(path).map_err(|error| DatasetError::open(path, error))?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer.write_record(COLUMNS)?;

    for transaction in transactions {
        writer.serialize(transaction)?;
    }

    writer.flush()?;

    debug!("Wrote {} transactions to {}", transactions.len(), path.display());

    Ok(())
}
