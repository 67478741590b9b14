//! Classification metrics for the per-number baseline

use crate::errors::{StatsError, StatsResult};
use crate::tests::convert_error;

fn check_lengths(y_true: &[f64], scores: &[f64]) -> StatsResult<()> {
    if y_true.is_empty() {
        return Err(StatsError::EmptyInput { field: "y_true" });
    }
    if y_true.len() != scores.len() {
        return Err(StatsError::DimensionMismatchMsg(format!(
            "y_true has {} elements, scores has {}",
            y_true.len(),
            scores.len()
        )));
    }
    Ok(())
}

/// Share of rows where `probability > threshold` matches the 0/1 label
pub fn accuracy(y_true: &[f64], probabilities: &[f64], threshold: f64) -> StatsResult<f64> {
    check_lengths(y_true, probabilities)?;

    let correct = y_true
        .iter()
        .zip(probabilities)
        .filter(|(&y, &p)| (p > threshold) == (y == 1.0))
        .count();
    Ok(correct as f64 / y_true.len() as f64)
}

/// Area under the ROC curve, ties counted as one half.
///
/// Returns `None` when the labels contain a single class, where the area is
/// undefined.
pub fn roc_auc(y_true: &[f64], scores: &[f64]) -> StatsResult<Option<f64>> {
    check_lengths(y_true, scores)?;

    let labels: Vec<bool> = y_true.iter().map(|&y| y == 1.0).collect();
    let n_pos = labels.iter().filter(|&&l| l).count();
    if n_pos == 0 || n_pos == labels.len() {
        return Ok(None);
    }

    anofox_tests::classification::auc(scores, &labels)
        .map(Some)
        .map_err(convert_error)
}
