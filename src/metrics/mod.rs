mod confusion;
mod errors;
#[cfg(test)]
mod tests;

pub use confusion::ConfusionMatrix;
pub use errors::MetricsError;
