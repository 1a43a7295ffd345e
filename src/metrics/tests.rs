use super::{ConfusionMatrix, MetricsError};

use anyhow::Result;

#[test]
fn test_confusion_matrix_counts_each_cell() -> Result<()> {
    let truth = [0, 0, 0, 1, 1, 0, 1];
    let predicted = [0, 1, 0, 1, 0, 0, 1];

    let matrix = ConfusionMatrix::from_predictions(&truth, &predicted)?;

    assert_eq!(matrix.true_negatives(), 3);
    assert_eq!(matrix.false_positives(), 1);
    assert_eq!(matrix.false_negatives(), 1);
    assert_eq!(matrix.true_positives(), 2);
    assert_eq!(matrix.total(), 7);

    Ok(())
}

#[test]
fn test_confusion_matrix_derived_scores() -> Result<()> {
    let matrix = ConfusionMatrix::from_predictions(&[0, 0, 1, 1], &[0, 1, 1, 1])?;

    assert_eq!(matrix.accuracy(), 0.75);
    assert!((matrix.precision() - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(matrix.recall(), 1.0);
    assert!((matrix.f1() - 0.8).abs() < 1e-12);

    Ok(())
}

#[test]
fn test_scores_are_zero_without_positive_predictions() -> Result<()> {
    let matrix = ConfusionMatrix::from_predictions(&[0, 0, 1], &[0, 0, 0])?;

    assert_eq!(matrix.precision(), 0.0);
    assert_eq!(matrix.recall(), 0.0);
    assert_eq!(matrix.f1(), 0.0);
    assert!((matrix.accuracy() - 2.0 / 3.0).abs() < 1e-12);

    let empty = ConfusionMatrix::from_predictions(&[], &[])?;

    assert_eq!(empty.accuracy(), 0.0);

    Ok(())
}

#[test]
fn test_confusion_matrix_displays_like_a_nested_array() -> Result<()> {
    let mut truth = vec![0usize; 12];
    truth.extend([1, 1]);

    let matrix = ConfusionMatrix::from_predictions(&truth, &[0; 14])?;

    assert_eq!(matrix.to_string(), "[[12  0]\n [ 2  0]]");

    Ok(())
}

#[test]
fn test_render_table_labels_axes() -> Result<()> {
    let matrix = ConfusionMatrix::from_predictions(&[0, 1], &[0, 1])?;
    let table = matrix.render_table(&[0, 1]);
    let header = table.lines().nth(1).unwrap_or_default();

    assert!(table.contains("Predicted label"));
    assert!(header.starts_with("  True label |"));
    assert!(header.trim_end().ends_with("0 |     1"));
    assert_eq!(table.lines().count(), 5);

    Ok(())
}

#[test]
fn test_render_table_falls_back_to_binary_labels() -> Result<()> {
    let matrix = ConfusionMatrix::from_predictions(&[0, 0], &[0, 0])?;

    assert_eq!(matrix.render_table(&[0]), matrix.render_table(&[0, 1]));
    assert_eq!(matrix.render_table(&[]), matrix.render_table(&[0, 1]));

    Ok(())
}

#[test]
fn test_confusion_matrix_rejects_bad_input() {
    assert!(matches!(
        ConfusionMatrix::from_predictions(&[0, 1], &[0]),
        Err(MetricsError::LengthMismatch { truth: 2, predicted: 1 })
    ));
    assert!(matches!(
        ConfusionMatrix::from_predictions(&[2], &[0]),
        Err(MetricsError::NonBinaryLabel(2))
    ));
}
