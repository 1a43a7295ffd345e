use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use anyhow::{anyhow, Result};
use tempfile::tempdir;

fn run(args: &[&str]) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_fraud-lab");
    let output = Command::new(binary_path)
        .args(args)
        .output()?;

    Ok(output)
}

#[test]
fn test_cli_screens_the_built_in_samples() -> Result<()> {
    let output = run(&["screen"])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut lines = stdout.lines();

    assert_eq!(lines.next(), Some("--- Fraud Detection Report ---"));
    assert!(stdout.contains("Total flagged transactions: 2"));
    assert!(stdout.contains("  Transaction ID: txn_2"));
    assert!(stdout.contains("  Transaction ID: txn_4"));
    assert!(!stdout.contains("txn_1"));
    assert_eq!(stdout.matches("Action Taken: Flagged for Manual Review").count(), 2);

    Ok(())
}

#[test]
fn test_cli_screens_a_dataset_with_custom_threshold() -> Result<()> {
    let sample_path = Path::new("samples").join("screening.csv");
    let sample_path = sample_path.to_str().ok_or_else(|| anyhow!("Non UTF-8 sample path"))?;

    let output = run(&["screen", "--input", sample_path, "--threshold", "500"])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("Total flagged transactions: 2"));
    assert!(stdout.contains("  Timestamp: 2024-03-02 11:02:10"));
    assert!(stdout.contains("  Amount: 612.00 EUR"));
    assert!(stdout.contains("  Amount: 1450.75 EUR"));
    assert!(!stdout.contains("  Transaction ID: 4\n"));

    Ok(())
}

#[test]
fn test_cli_generates_then_trains_on_the_dataset() -> Result<()> {
    let directory = tempdir()?;
    let dataset_path = directory.path().join("financial_transactions_dataset.csv");
    let dataset = dataset_path.to_str().ok_or_else(|| anyhow!("Non UTF-8 temporary path"))?;

    let generated = run(&["generate", "--records", "400", "--fraud-rate", "0.1", "--seed", "3", "--output", dataset])?;

    assert!(generated.status.success());

    let stdout = String::from_utf8(generated.stdout)?;
    let mut lines = stdout.lines();

    assert_eq!(lines.next(), Some("Synthetic financial transactions dataset generated with 400 records."));
    assert!(lines.next().is_some_and(|line| line.starts_with("Fraudulent transactions: ")));
    assert_eq!(lines.next(), Some(format!("Dataset saved to {dataset}").as_str()));
    assert_eq!(fs::read_to_string(&dataset_path)?.lines().count(), 401);

    let trained = run(&["train", "--input", dataset, "--classifier", "decision-tree", "--log-level", "error"])?;

    assert!(trained.status.success());

    let stdout = String::from_utf8(trained.stdout)?;
    let mut lines = stdout.lines();

    assert!(lines.next().is_some_and(|line| line.starts_with("Confusion matrix:  [[")));
    assert!(lines.next().is_some_and(|line| line.ends_with("]]")));

    let accuracy: f64 = lines.next()
        .and_then(|line| line.strip_prefix("Accuracy score:  "))
        .ok_or_else(|| anyhow!("Accuracy line missing"))?
        .parse()?;

    assert!((0.0..=1.0).contains(&accuracy));
    assert!(stdout.contains("Predicted label"));

    Ok(())
}

#[test]
fn test_cli_compares_every_classifier() -> Result<()> {
    let directory = tempdir()?;
    let dataset_path = directory.path().join("dataset.csv");
    let dataset = dataset_path.to_str().ok_or_else(|| anyhow!("Non UTF-8 temporary path"))?;

    assert!(run(&["generate", "--records", "250", "--fraud-rate", "0.2", "--seed", "5", "--output", dataset])?.status.success());

    let output = run(&["compare", "--input", dataset, "--standardize"])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let rows: Vec<Vec<&str>> = stdout.lines().skip(1).map(|line| line.split(',').collect()).collect();

    assert_eq!(stdout.lines().next(), Some("classifier,accuracy,precision,recall,f1,train_size,test_size"));
    assert_eq!(rows.iter().map(|fields| fields[0]).collect::<Vec<_>>(), vec!["decision-tree", "knn", "perceptron", "svm"]);
    assert!(rows.iter().all(|fields| fields.len() == 7 && fields[6] == "50"));

    Ok(())
}

#[test]
fn test_cli_accepts_svm_hyper_parameters() -> Result<()> {
    let directory = tempdir()?;
    let dataset_path = directory.path().join("dataset.csv");
    let dataset = dataset_path.to_str().ok_or_else(|| anyhow!("Non UTF-8 temporary path"))?;

    assert!(run(&["generate", "--records", "200", "--fraud-rate", "0.2", "--seed", "9", "--output", dataset])?.status.success());

    let output = run(&["train", "--input", dataset, "--classifier", "svm", "--svm-c", "2.5", "--gamma", "0", "--standardize"])?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.starts_with("Confusion matrix:  [["));

    let rejected = run(&["train", "--input", dataset, "--c", "2.5"])?;

    assert!(!rejected.status.success());

    Ok(())
}

#[test]
fn test_cli_fails_on_missing_dataset() -> Result<()> {
    let directory = tempdir()?;
    let missing = directory.path().join("missing.csv");
    let missing = missing.to_str().ok_or_else(|| anyhow!("Non UTF-8 temporary path"))?;

    let output = run(&["train", "--input", missing])?;

    assert!(!output.status.success());

    Ok(())
}
