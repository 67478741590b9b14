//! Binary membership features for the next-draw baseline

use crate::draws::DrawStore;
use crate::errors::{StatsError, StatsResult};
use crate::types::{NUMBER_COUNT, NUMBER_MIN};

/// Slot `n - 1` is 1 when number `n` was among the draw's main numbers
pub type MembershipRow = [u8; NUMBER_COUNT];

/// One membership row per draw, in store order
pub fn membership_matrix(store: &DrawStore) -> Vec<MembershipRow> {
    store
        .iter()
        .map(|draw| {
            let mut row = [0u8; NUMBER_COUNT];
            for &n in draw.main_numbers() {
                row[usize::from(n - NUMBER_MIN)] = 1;
            }
            row
        })
        .collect()
}

/// Lagged design for predicting draw `t` from draws `t-1 ..= t-n_lags`
#[derive(Debug, Clone)]
pub struct LaggedDataset {
    /// Feature columns (`n_lags * 50`), lag 1 first, numbers ascending
    /// within each lag
    pub x: Vec<Vec<f64>>,
    /// One label column per number 1..=50
    pub y: Vec<Vec<f64>>,
    /// Rows in every column
    pub n_rows: usize,
    pub n_lags: usize,
}

fn check_lags(n_draws: usize, n_lags: usize) -> StatsResult<()> {
    if n_lags == 0 {
        return Err(StatsError::InvalidValue {
            field: "n_lags",
            message: "must be at least 1".into(),
        });
    }
    if n_lags >= n_draws {
        return Err(StatsError::InsufficientData {
            rows: n_draws,
            needed: n_lags + 1,
        });
    }
    Ok(())
}

/// Build lagged features and labels. Rows exist for draws `n_lags..N`.
pub fn lagged_features(membership: &[MembershipRow], n_lags: usize) -> StatsResult<LaggedDataset> {
    check_lags(membership.len(), n_lags)?;

    let n_rows = membership.len() - n_lags;
    let x: Vec<Vec<f64>> = (1..=n_lags)
        .flat_map(|lag| {
            (0..NUMBER_COUNT).map(move |slot| {
                (n_lags..membership.len())
                    .map(|t| f64::from(membership[t - lag][slot]))
                    .collect()
            })
        })
        .collect();
    let y: Vec<Vec<f64>> = (0..NUMBER_COUNT)
        .map(|slot| {
            membership[n_lags..]
                .iter()
                .map(|row| f64::from(row[slot]))
                .collect()
        })
        .collect();

    Ok(LaggedDataset {
        x,
        y,
        n_rows,
        n_lags,
    })
}

/// Feature row for the draw after the last one in `membership`
pub fn latest_features(membership: &[MembershipRow], n_lags: usize) -> StatsResult<Vec<f64>> {
    check_lags(membership.len(), n_lags)?;

    let last = membership.len();
    Ok((1..=n_lags)
        .flat_map(|lag| membership[last - lag].iter().map(|&v| f64::from(v)))
        .collect())
}
