use std::path::Path;
use std::sync::Arc;

use tokio::task::{spawn_blocking, JoinSet};
use tracing::{debug, error, info};

use crate::classifiers::{Classifier, ClassifierKind, ClassifierSettings};
use crate::dataset::DatasetReader;
use crate::features::{train_test_split, FeatureMatrix, FeatureSplit, SplitConfig};
use crate::metrics::ConfusionMatrix;
use crate::training::{Evaluation, EvaluationStorage, Storage, TrainingError};

/// Reads a labelled dataset, fits classifiers off the async runtime and
/// scores them on a held-out partition.
pub struct TrainingEngine {
    reader: DatasetReader,
    split: SplitConfig,
    settings: ClassifierSettings
}

impl TrainingEngine {
    pub fn new(split: SplitConfig, settings: ClassifierSettings) -> Self {
        Self {
            reader: DatasetReader::new(),
            split,
            settings
        }
    }

    /// Trains and evaluates a single classifier.
    pub async fn run(&self, path: &Path, kind: ClassifierKind) -> Result<Evaluation, TrainingError> {
        let split = self.prepare(path).await?;

        evaluate(self.settings.build(kind), split).await
    }

    /// Trains every requested classifier concurrently on the same split.
    ///
    /// A classifier that fails is logged and left out of the result.
    pub async fn compare(&self, path: &Path, kinds: &[ClassifierKind]) -> Result<Vec<Evaluation>, TrainingError> {
        let split = self.prepare(path).await?;
        let storage = Arc::new(EvaluationStorage::new());
        let mut tasks = JoinSet::new();

        for kind in kinds.iter().copied() {
            let classifier = self.settings.build(kind);
            let split = split.clone();
            let storage = storage.clone();

            tasks.spawn(async move {
                match evaluate(classifier, split).await {
                    Ok(evaluation) => storage.save(evaluation),
                    Err(error) => error!("Classifier [{kind}] could not be evaluated: {error}")
                }
            });
        }

        while let Some(result) = tasks.join_next().await {
            if let Err(error) = result {
                error!("A comparison task did not finish gracefully: {error:?}");
            }
        }

        Ok(storage.sorted())
    }

    async fn prepare(&self, path: &Path) -> Result<Arc<FeatureSplit>, TrainingError> {
        let transactions = self.reader.read(path).await?;

        if transactions.is_empty() {
            return Err(TrainingError::EmptyDataset(path.to_path_buf()));
        }

        let matrix = FeatureMatrix::from_transactions(&transactions);
        info!("preprocessing done");

        let split = train_test_split(&matrix, &self.split)?;

        Ok(Arc::new(split))
    }
}

async fn evaluate(mut classifier: Box<dyn Classifier>, split: Arc<FeatureSplit>) -> Result<Evaluation, TrainingError> {
    let name = classifier.name();

    let training = split.clone();
    let classifier = spawn_blocking(move || {
        classifier.fit(&training.train.rows, &training.train.labels).map(|_| classifier)
    }).await??;

    info!("training done [{name}]");

    let classes = classifier.classes().to_vec();

    let testing = split.clone();
    let predictions = spawn_blocking(move || classifier.predict(&testing.test.rows)).await??;

    info!("predictions done [{name}]");

    let confusion = ConfusionMatrix::from_predictions(&split.test.labels, &predictions)?;
    debug!("{name} confusion matrix: {confusion:?}");

    Ok(Evaluation::new(name, classes, confusion, split.train.len(), split.test.len()))
}
