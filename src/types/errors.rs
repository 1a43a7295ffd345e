use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypesError {
    #[error("Unknown currency code: [{0}]")]
    UnknownCurrency(String),
    #[error("Invalid amount [{value}]: {source}")]
    InvalidAmount {
        value: String,
        source: rust_decimal::Error
    },
    #[error("Invalid timestamp [{value}]: {source}")]
    InvalidTimestamp {
        value: String,
        source: chrono::ParseError
    }
}
