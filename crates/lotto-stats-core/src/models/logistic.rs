//! L2-regularised logistic regression
//!
//! Thin wrapper over `anofox_regression::solvers::LogisticRegression`
//! (penalised IRLS with `λ = 1 / C`, intercept unpenalised).

use crate::errors::{StatsError, StatsResult};
use crate::types::{LogisticFitResult, LogisticOptions};
use anofox_regression::solvers::{LogisticRegression, RegressionError};
use faer::{Col, Mat};

fn convert_error(e: RegressionError, options: &LogisticOptions) -> StatsError {
    match e {
        RegressionError::SingularMatrix => StatsError::SingularMatrix,
        RegressionError::ConvergenceFailed { .. } => StatsError::ConvergenceFailure {
            iterations: options.max_iterations,
            tolerance: options.tolerance,
        },
        RegressionError::InsufficientObservations { needed, got } => {
            StatsError::InsufficientData { rows: got, needed }
        }
        other => StatsError::RegressError(format!("{:?}", other)),
    }
}

fn validate_inputs(y: &[f64], x: &[Vec<f64>], options: &LogisticOptions) -> StatsResult<()> {
    if y.is_empty() {
        return Err(StatsError::EmptyInput { field: "y" });
    }
    for (j, col) in x.iter().enumerate() {
        if col.len() != y.len() {
            return Err(StatsError::DimensionMismatchMsg(format!(
                "feature {} has {} observations, y has {}",
                j,
                col.len(),
                y.len()
            )));
        }
    }
    if y.iter().any(|&v| v != 0.0 && v != 1.0) {
        return Err(StatsError::InvalidValue {
            field: "y",
            message: "logistic regression requires 0/1 labels".to_string(),
        });
    }
    if !(options.c > 0.0 && options.c.is_finite()) {
        return Err(StatsError::InvalidValue {
            field: "c",
            message: format!("must be a finite value > 0, got {}", options.c),
        });
    }
    Ok(())
}

/// Relative cut-off below which a singular value counts as zero
const RANK_TOLERANCE: f64 = 1e-10;

fn is_constant(col: &[f64]) -> bool {
    col.windows(2).all(|w| w[0] == w[1])
}

fn logit(p: f64) -> f64 {
    (p / (1.0 - p)).ln()
}

fn fit_columns(
    x: &Mat<f64>,
    y: &Col<f64>,
    options: &LogisticOptions,
) -> StatsResult<(Vec<f64>, Option<f64>, u32)> {
    let fitted = LogisticRegression::builder()
        .c(options.c)
        .with_intercept(options.fit_intercept)
        .max_iterations(options.max_iterations as usize)
        .tolerance(options.tolerance)
        .compute_inference(false)
        .build()
        .fit(x, y)
        .map_err(|e| convert_error(e, options))?;

    // Aliased columns come back as NaN and take no part in prediction
    let coefficients = fitted
        .coefficients()
        .iter()
        .map(|&b| if b.is_nan() { 0.0 } else { b })
        .collect();
    Ok((coefficients, fitted.intercept(), fitted.n_iter() as u32))
}

/// Fit with more parameters than rows.
///
/// The L2 solution lies in the row space of the (centred, when an intercept
/// is fitted) design, and the penalty is invariant under an orthonormal
/// change of basis. Fitting on `Z = X V` for the right singular vectors `V`
/// and mapping back with `β = V θ` gives the same optimum with at most
/// `n - 1` columns.
fn fit_in_row_space(
    x: &Mat<f64>,
    y: &Col<f64>,
    options: &LogisticOptions,
) -> StatsResult<(Vec<f64>, Option<f64>, u32)> {
    let (n, p) = (x.nrows(), x.ncols());
    let means: Vec<f64> = (0..p)
        .map(|j| {
            if options.fit_intercept {
                (0..n).map(|i| x[(i, j)]).sum::<f64>() / n as f64
            } else {
                0.0
            }
        })
        .collect();
    let centred = Mat::from_fn(n, p, |i, j| x[(i, j)] - means[j]);

    let svd = centred.thin_svd().map_err(|_| StatsError::SingularMatrix)?;
    let singular = svd.S().column_vector().to_owned();
    let v = svd.V().to_owned();
    let s_max = (0..singular.nrows()).map(|i| singular[i]).fold(0.0, f64::max);
    let rank: Vec<usize> = (0..singular.nrows())
        .filter(|&i| singular[i] > s_max * RANK_TOLERANCE)
        .collect();
    let basis = Mat::from_fn(p, rank.len(), |j, k| v[(j, rank[k])]);
    tracing::debug!(n, p, rank = rank.len(), "fitting in the row space of the design");

    let z = &centred * &basis;
    let (theta, intercept, iterations) = fit_columns(&z, y, options)?;

    let coefficients: Vec<f64> = (0..p)
        .map(|j| (0..rank.len()).map(|k| basis[(j, k)] * theta[k]).sum())
        .collect();
    let intercept = intercept.map(|b| {
        b - means
            .iter()
            .zip(&coefficients)
            .map(|(m, c)| m * c)
            .sum::<f64>()
    });
    Ok((coefficients, intercept, iterations))
}

/// Fit a binary logistic regression.
///
/// # Arguments
/// * `y` - 0/1 labels
/// * `x` - Feature matrix (p features, each with n observations)
/// * `options` - Fitting options
///
/// Labels holding a single class produce a constant model predicting that
/// class. With an intercept, constant feature columns are left out of the
/// fit and get a zero coefficient: the unpenalised intercept absorbs them.
/// More features than rows are handled through the penalty.
pub fn fit_logistic(
    y: &[f64],
    x: &[Vec<f64>],
    options: &LogisticOptions,
) -> StatsResult<LogisticFitResult> {
    validate_inputs(y, x, options)?;

    let n = y.len();
    let n_features = x.len();
    let positives = y.iter().filter(|&&v| v == 1.0).count();

    if positives == 0 || positives == n {
        let p = if positives == 0 { 0.0 } else { 1.0 };
        tracing::debug!(n, probability = p, "single-class labels; using constant model");
        return Ok(LogisticFitResult {
            coefficients: vec![0.0; n_features],
            intercept: options.fit_intercept.then_some(0.0),
            fixed_probability: Some(p),
            n_observations: n,
            n_features,
            iterations: 0,
        });
    }

    let kept: Vec<usize> = (0..n_features)
        .filter(|&j| !(options.fit_intercept && is_constant(&x[j])))
        .collect();

    if kept.is_empty() && options.fit_intercept {
        return Ok(LogisticFitResult {
            coefficients: vec![0.0; n_features],
            intercept: Some(logit(positives as f64 / n as f64)),
            fixed_probability: None,
            n_observations: n,
            n_features,
            iterations: 0,
        });
    }

    let x_kept = Mat::from_fn(n, kept.len(), |i, j| x[kept[j]][i]);
    let y_col = Col::from_fn(n, |i| y[i]);
    let n_params = kept.len() + usize::from(options.fit_intercept);

    let (kept_coefficients, intercept, iterations) = if n_params > n {
        fit_in_row_space(&x_kept, &y_col, options)?
    } else {
        fit_columns(&x_kept, &y_col, options)?
    };

    let mut coefficients = vec![0.0; n_features];
    for (&j, &b) in kept.iter().zip(kept_coefficients.iter()) {
        coefficients[j] = b;
    }

    Ok(LogisticFitResult {
        coefficients,
        intercept,
        fixed_probability: None,
        n_observations: n,
        n_features,
        iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::predict::sigmoid;
    use approx::assert_relative_eq;

    /// Gradient of the penalised negative log-likelihood
    fn gradient_at_solution(y: &[f64], x: &[Vec<f64>], fit: &LogisticFitResult, c: f64) -> Vec<f64> {
        let intercept = fit.intercept.unwrap_or(0.0);
        let mut grad = vec![0.0; x.len() + 1];
        for i in 0..y.len() {
            let eta: f64 = intercept
                + fit
                    .coefficients
                    .iter()
                    .zip(x)
                    .map(|(b, col)| b * col[i])
                    .sum::<f64>();
            let r = sigmoid(eta) - y[i];
            grad[0] += r;
            for (j, col) in x.iter().enumerate() {
                grad[j + 1] += col[i] * r;
            }
        }
        for (j, b) in fit.coefficients.iter().enumerate() {
            grad[j + 1] += b / c;
        }
        grad
    }

    #[test]
    fn test_logistic_basic() {
        let x = vec![vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]];
        let y = vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0];

        let options = LogisticOptions {
            tolerance: 1e-10,
            ..LogisticOptions::default()
        };
        let fit = fit_logistic(&y, &x, &options).unwrap();

        assert!(fit.coefficients[0] > 0.0);
        assert!(fit.intercept.unwrap() < 0.0);
        assert!(fit.fixed_probability.is_none());
        assert!(fit.iterations > 0);
        for g in gradient_at_solution(&y, &x, &fit, options.c) {
            assert_relative_eq!(g, 0.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_separable_data_stays_finite() {
        let x = vec![vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]];
        let y = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
        let fit = fit_logistic(&y, &x, &LogisticOptions::default()).unwrap();
        assert!(fit.coefficients[0].is_finite());
        assert!(fit.coefficients[0] > 0.0);
    }

    #[test]
    fn test_constant_columns_get_zero_coefficient() {
        let x = vec![
            vec![0.0; 8],
            vec![0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0],
            vec![1.0; 8],
        ];
        let y = vec![0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0];
        let fit = fit_logistic(&y, &x, &LogisticOptions::default()).unwrap();
        assert_eq!(fit.coefficients.len(), 3);
        assert_eq!(fit.coefficients[0], 0.0);
        assert_eq!(fit.coefficients[2], 0.0);
        assert!(fit.coefficients[1] > 0.0);
    }

    #[test]
    fn test_all_constant_features_fit_the_base_rate() {
        let x = vec![vec![0.0; 4]];
        let fit = fit_logistic(&[0.0, 1.0, 0.0, 0.0], &x, &LogisticOptions::default()).unwrap();
        assert_relative_eq!(sigmoid(fit.intercept.unwrap()), 0.25, epsilon = 1e-12);
        assert_eq!(fit.coefficients, vec![0.0]);
    }

    #[test]
    fn test_single_class_labels() {
        let x = vec![vec![1.0, 0.0, 1.0]];
        let fit = fit_logistic(&[0.0, 0.0, 0.0], &x, &LogisticOptions::default()).unwrap();
        assert_eq!(fit.fixed_probability, Some(0.0));
        let fit = fit_logistic(&[1.0, 1.0, 1.0], &x, &LogisticOptions::default()).unwrap();
        assert_eq!(fit.fixed_probability, Some(1.0));
    }

    #[test]
    fn test_invalid_labels() {
        let x = vec![vec![1.0, 2.0, 3.0]];
        let result = fit_logistic(&[0.0, 0.5, 1.0], &x, &LogisticOptions::default());
        assert!(matches!(result, Err(StatsError::InvalidValue { field: "y", .. })));
    }

    #[test]
    fn test_dimension_mismatch() {
        let x = vec![vec![1.0, 2.0]];
        let result = fit_logistic(&[0.0, 1.0, 1.0], &x, &LogisticOptions::default());
        assert!(matches!(result, Err(StatsError::DimensionMismatchMsg(_))));
    }

    #[test]
    fn test_invalid_c() {
        let x = vec![vec![1.0, 2.0, 3.0]];
        let options = LogisticOptions {
            c: 0.0,
            ..LogisticOptions::default()
        };
        let result = fit_logistic(&[0.0, 1.0, 1.0], &x, &options);
        assert!(matches!(result, Err(StatsError::InvalidValue { field: "c", .. })));
    }

    #[test]
    fn test_more_features_than_rows() {
        let x: Vec<Vec<f64>> = (0..6)
            .map(|j| (0..4).map(|i| ((i + j) % 3) as f64).collect())
            .collect();
        let y = vec![0.0, 1.0, 0.0, 1.0];
        let options = LogisticOptions {
            tolerance: 1e-10,
            ..LogisticOptions::default()
        };
        let fit = fit_logistic(&y, &x, &options).unwrap();

        assert_eq!(fit.coefficients.len(), 6);
        assert!(fit.coefficients.iter().all(|b| b.is_finite()));
        for g in gradient_at_solution(&y, &x, &fit, options.c) {
            assert_relative_eq!(g, 0.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_two_rows_many_features() {
        let mut x = vec![vec![0.0, 0.0]; 10];
        x[3] = vec![1.0, 0.0];
        x[7] = vec![0.0, 1.0];
        let y = vec![1.0, 0.0];
        let fit = fit_logistic(&y, &x, &LogisticOptions::default()).unwrap();

        assert!(fit.coefficients[3] > 0.0);
        assert!(fit.coefficients[7] < 0.0);
        assert_relative_eq!(fit.coefficients[3], -fit.coefficients[7], epsilon = 1e-6);
        assert!(sigmoid(fit.intercept.unwrap() + fit.coefficients[3]) > 0.5);
    }
}
