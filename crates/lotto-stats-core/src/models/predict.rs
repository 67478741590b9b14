//! Probability predictions from a fitted logistic model

use crate::errors::{StatsError, StatsResult};
use crate::types::LogisticFitResult;

/// Numerically stable logistic function
pub(crate) fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// Predicted probability for a single feature row
pub fn predict_row(model: &LogisticFitResult, row: &[f64]) -> StatsResult<f64> {
    if row.len() != model.n_features {
        return Err(StatsError::DimensionMismatchMsg(format!(
            "row has {} features, model expects {}",
            row.len(),
            model.n_features
        )));
    }
    if let Some(p) = model.fixed_probability {
        return Ok(p);
    }
    let eta = model.intercept.unwrap_or(0.0)
        + model
            .coefficients
            .iter()
            .zip(row)
            .map(|(b, v)| b * v)
            .sum::<f64>();
    Ok(sigmoid(eta))
}

/// Predicted probabilities for every observation
///
/// # Arguments
/// * `x` - Feature matrix (p features, each with n observations)
/// * `model` - Fitted model
#[allow(clippy::needless_range_loop)]
pub fn predict_proba(x: &[Vec<f64>], model: &LogisticFitResult) -> StatsResult<Vec<f64>> {
    if x.is_empty() {
        return Err(StatsError::EmptyInput { field: "x" });
    }
    if x.len() != model.n_features {
        return Err(StatsError::DimensionMismatchMsg(format!(
            "x has {} features, model expects {}",
            x.len(),
            model.n_features
        )));
    }

    let n_obs = x[0].len();
    for col in x.iter() {
        if col.len() != n_obs {
            return Err(StatsError::DimensionMismatchMsg(format!(
                "feature columns differ in length: {} vs {}",
                col.len(),
                n_obs
            )));
        }
    }

    if let Some(p) = model.fixed_probability {
        return Ok(vec![p; n_obs]);
    }

    let mut probabilities = Vec::with_capacity(n_obs);
    for i in 0..n_obs {
        let mut eta = model.intercept.unwrap_or(0.0);
        for (j, coef) in model.coefficients.iter().enumerate() {
            eta += coef * x[j][i];
        }
        probabilities.push(sigmoid(eta));
    }
    Ok(probabilities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model(coefficients: Vec<f64>, intercept: Option<f64>) -> LogisticFitResult {
        let n_features = coefficients.len();
        LogisticFitResult {
            coefficients,
            intercept,
            fixed_probability: None,
            n_observations: 0,
            n_features,
            iterations: 1,
        }
    }

    #[test]
    fn test_predict_basic() {
        let m = model(vec![2.0], Some(-1.0));
        let x = vec![vec![0.0, 0.5, 1.0]];
        let p = predict_proba(&x, &m).unwrap();
        assert_relative_eq!(p[0], sigmoid(-1.0), epsilon = 1e-12);
        assert_relative_eq!(p[1], 0.5, epsilon = 1e-12);
        assert_relative_eq!(p[2], sigmoid(1.0), epsilon = 1e-12);
        assert_relative_eq!(predict_row(&m, &[1.0]).unwrap(), p[2], epsilon = 1e-12);
    }

    #[test]
    fn test_fixed_probability() {
        let mut m = model(vec![0.0, 0.0], None);
        m.fixed_probability = Some(1.0);
        let x = vec![vec![3.0, 4.0], vec![1.0, 1.0]];
        assert_eq!(predict_proba(&x, &m).unwrap(), vec![1.0, 1.0]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let m = model(vec![1.0, 1.0], None);
        assert!(predict_proba(&[vec![1.0]], &m).is_err());
        assert!(predict_row(&m, &[1.0]).is_err());
    }
}
