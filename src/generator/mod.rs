mod config;
mod errors;
mod synthetic;
mod tables;
#[cfg(test)]
mod tests;

pub use config::{GeneratorConfig, DEFAULT_FRAUD_RATE, DEFAULT_NUM_RECORDS, DEFAULT_OUTPUT_PATH};
pub use errors::GeneratorError;
pub use synthetic::{GenerationSummary, SyntheticGenerator};
