mod errors;
mod extractor;
mod scaler;
mod split;

pub use errors::FeatureError;
pub use extractor::FeatureMatrix;
pub use scaler::StandardScaler;
pub use split::{train_test_split, FeatureSplit, SplitConfig};
