mod classifiers;
mod compliance;
mod dataset;
mod features;
mod generator;
mod metrics;
mod models;
mod training;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::classifiers::{ClassifierKind, ClassifierSettings, Kernel};
use crate::compliance::{
    compliance_workflow, generate_report, sample_transactions, AmountThresholdRule, SampleTransaction,
    DEFAULT_AMOUNT_THRESHOLD
};
use crate::dataset::{write_transactions, DatasetReader};
use crate::features::SplitConfig;
use crate::generator::{
    GenerationSummary, GeneratorConfig, SyntheticGenerator, DEFAULT_FRAUD_RATE, DEFAULT_NUM_RECORDS, DEFAULT_OUTPUT_PATH
};
use crate::training::{Evaluation, TrainingEngine};
use crate::types::timestamp;

#[derive(Parser)]
#[command(about = "Synthetic fraud data, classifier training and rule-based screening", long_about = None)]
struct Cli {
    /// trace, debug, info, warn or error
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a labeled synthetic transaction dataset
    Generate {
        #[arg(short, long, default_value_t = DEFAULT_NUM_RECORDS)]
        records: usize,

        #[arg(long, default_value_t = DEFAULT_FRAUD_RATE)]
        fraud_rate: f64,

        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, value_parser = parse_timestamp)]
        start: Option<NaiveDateTime>,

        #[arg(long, value_parser = parse_timestamp)]
        end: Option<NaiveDateTime>
    },
    /// Train one classifier and report its confusion matrix
    Train {
        #[arg(long, default_value = "svm")]
        classifier: ClassifierKind,

        #[command(flatten)]
        training: TrainingArgs
    },
    /// Train several classifiers concurrently on the same split
    Compare {
        #[arg(long, value_delimiter = ',', default_values_t = ClassifierKind::ALL)]
        classifiers: Vec<ClassifierKind>,

        #[command(flatten)]
        training: TrainingArgs
    },
    /// Flag transactions above an amount threshold for manual review
    Screen {
        /// Dataset to screen; the built-in samples are used when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(long, default_value_t = DEFAULT_AMOUNT_THRESHOLD)]
        threshold: Decimal
    }
}

#[derive(Args)]
struct TrainingArgs {
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    input: PathBuf,

    /// RBF kernel coefficient; zero selects the linear kernel
    #[arg(long, default_value_t = 1e-6)]
    gamma: f64,

    /// SVM inverse regularization strength
    #[arg(long = "svm-c", default_value_t = 1.0)]
    c: f64,

    #[arg(short, long, default_value_t = 4)]
    k: usize,

    #[arg(long)]
    max_depth: Option<usize>,

    #[arg(long, default_value_t = 0.2)]
    test_fraction: f64,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long)]
    standardize: bool,

    #[arg(long)]
    no_stratify: bool
}

impl TrainingArgs {
    fn split_config(&self) -> SplitConfig {
        SplitConfig {
            test_fraction: self.test_fraction,
            seed: self.seed,
            stratify: !self.no_stratify,
            standardize: self.standardize
        }
    }

    fn classifier_settings(&self) -> ClassifierSettings {
        let mut settings = ClassifierSettings::default();

        settings.svm.kernel = if self.gamma == 0.0 { Kernel::Linear } else { Kernel::Rbf { gamma: self.gamma } };
        settings.svm.c = self.c;
        settings.svm.seed = self.seed;
        settings.knn.k = self.k;
        settings.perceptron.seed = self.seed;
        settings.tree.max_depth = self.max_depth;

        settings
    }

    fn engine(&self) -> TrainingEngine {
        TrainingEngine::new(self.split_config(), self.classifier_settings())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let timer = Instant::now();

    match cli.command {
        Commands::Generate { records, fraud_rate, output, seed, start, end } => {
            let defaults = GeneratorConfig::default();
            let config = GeneratorConfig {
                num_records: records,
                fraud_rate,
                start: start.unwrap_or(defaults.start),
                end: end.unwrap_or(defaults.end),
                output_path: output,
                seed,
                ..defaults
            };

            generate_dataset(config)?;
        }
        Commands::Train { classifier, training } => {
            let evaluation = training.engine().run(&training.input, classifier).await?;
            write_evaluation_to_stdout(&evaluation)?;
        }
        Commands::Compare { classifiers, training } => {
            let evaluations = training.engine().compare(&training.input, &classifiers).await?;
            write_comparison_to_stdout(&evaluations)?;
        }
        Commands::Screen { input, threshold } => {
            screen_transactions(input.as_deref(), threshold).await?;
        }
    }

    info!("Completed in: {:?}", timer.elapsed());

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            LevelFilter::INFO
        }
    }
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime, types::TypesError> {
    timestamp::parse(value)
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries reports and metrics, so diagnostics go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn generate_dataset(config: GeneratorConfig) -> Result<()> {
    let output_path = config.output_path.clone();
    let transactions = SyntheticGenerator::new(config)?.generate()?;

    write_transactions(&output_path, &transactions)?;

    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "{}", GenerationSummary::from_transactions(&transactions))?;
    writeln!(output, "Dataset saved to {}", output_path.display())?;

    output.flush()?;

    Ok(())
}

async fn screen_transactions(input: Option<&Path>, threshold: Decimal) -> Result<()> {
    let transactions = match input {
        Some(path) => DatasetReader::new().read(path).await?
            .iter()
            .map(SampleTransaction::from)
            .collect(),
        None => sample_transactions()
    };

    let rule = AmountThresholdRule::new(threshold);
    let flagged = compliance_workflow(&rule, &transactions);

    let mut output = BufWriter::new(stdout().lock());
    generate_report(&mut output, &flagged, Local::now().naive_local())?;
    output.flush()?;

    Ok(())
}

fn write_evaluation_to_stdout(evaluation: &Evaluation) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "Confusion matrix:  {}", evaluation.confusion)?;
    writeln!(output, "Accuracy score:  {:?}", evaluation.accuracy)?;
    writeln!(output)?;
    write!(output, "{}", evaluation.confusion.render_table(&evaluation.classes))?;

    output.flush()?;

    Ok(())
}

fn write_comparison_to_stdout(evaluations: &[Evaluation]) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "classifier,accuracy,precision,recall,f1,train_size,test_size")?;

    for evaluation in evaluations {
        writeln!(
            output,
            "{},{:.4},{:.4},{:.4},{:.4},{},{}",
            evaluation.classifier,
            evaluation.accuracy,
            evaluation.confusion.precision(),
            evaluation.confusion.recall(),
            evaluation.confusion.f1(),
            evaluation.train_size,
            evaluation.test_size
        )?;
    }

    output.flush()?;

    Ok(())
}
