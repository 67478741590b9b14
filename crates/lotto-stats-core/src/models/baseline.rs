//! One-vs-rest logistic baseline predicting next-draw membership per number

use super::features::{latest_features, lagged_features, membership_matrix};
use super::logistic::fit_logistic;
use super::predict::{predict_proba, predict_row};
use crate::diagnostics::{accuracy, roc_auc};
use crate::draws::DrawStore;
use crate::errors::{StatsError, StatsResult};
use crate::types::{BaselineOptions, BaselineReport, NextDrawScore, NumberMetrics, NUMBER_MIN};

fn number_for_slot(slot: usize) -> u8 {
    slot as u8 + NUMBER_MIN
}

/// Train on all but the last `test_size` lagged rows and score the held-out
/// rows for every number.
pub fn evaluate_baseline(store: &DrawStore, options: &BaselineOptions) -> StatsResult<BaselineReport> {
    let membership = membership_matrix(store);
    let data = lagged_features(&membership, options.n_lags)?;

    if data.n_rows <= options.test_size {
        return Err(StatsError::InsufficientData {
            rows: data.n_rows,
            needed: options.test_size + 1,
        });
    }
    let split = data.n_rows - options.test_size;

    let x_train: Vec<Vec<f64>> = data.x.iter().map(|col| col[..split].to_vec()).collect();
    let x_test: Vec<Vec<f64>> = data.x.iter().map(|col| col[split..].to_vec()).collect();

    let mut per_number = Vec::with_capacity(data.y.len());
    for (slot, labels) in data.y.iter().enumerate() {
        let model = fit_logistic(&labels[..split], &x_train, &options.logistic)?;
        let probabilities = predict_proba(&x_test, &model)?;
        let y_test = &labels[split..];

        let metrics = NumberMetrics {
            number: number_for_slot(slot),
            accuracy: accuracy(y_test, &probabilities, options.threshold)?,
            roc_auc: roc_auc(y_test, &probabilities)?,
        };
        tracing::debug!(
            number = metrics.number,
            accuracy = metrics.accuracy,
            roc_auc = ?metrics.roc_auc,
            iterations = model.iterations,
            "evaluated number"
        );
        per_number.push(metrics);
    }

    let mean_accuracy =
        per_number.iter().map(|m| m.accuracy).sum::<f64>() / per_number.len() as f64;
    let defined: Vec<f64> = per_number.iter().filter_map(|m| m.roc_auc).collect();
    let mean_roc_auc = if defined.is_empty() {
        None
    } else {
        Some(defined.iter().sum::<f64>() / defined.len() as f64)
    };

    tracing::info!(
        n_train = split,
        n_test = options.test_size,
        n_lags = options.n_lags,
        mean_accuracy,
        "evaluated per-number baseline"
    );

    Ok(BaselineReport {
        per_number,
        mean_accuracy,
        mean_roc_auc,
        n_train: split,
        n_test: options.test_size,
        n_lags: options.n_lags,
    })
}

/// Fit every per-number model on all lagged rows and score the draw that
/// follows the last one in the store.
///
/// Scores are ranked by probability descending, then number ascending.
pub fn score_next_draw(store: &DrawStore, options: &BaselineOptions) -> StatsResult<Vec<NextDrawScore>> {
    let membership = membership_matrix(store);
    let data = lagged_features(&membership, options.n_lags)?;
    let next_row = latest_features(&membership, options.n_lags)?;

    let mut scores = Vec::with_capacity(data.y.len());
    for (slot, labels) in data.y.iter().enumerate() {
        let model = fit_logistic(labels, &data.x, &options.logistic)?;
        scores.push(NextDrawScore {
            number: number_for_slot(slot),
            probability: predict_row(&model, &next_row)?,
        });
    }

    scores.sort_by(|a, b| {
        b.probability
            .total_cmp(&a.probability)
            .then(a.number.cmp(&b.number))
    });
    Ok(scores)
}
