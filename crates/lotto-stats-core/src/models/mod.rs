//! Next-draw membership models
//!
//! - Membership matrix and lagged features
//! - L2-regularised logistic regression
//! - Per-number baseline evaluation and next-draw scoring

mod baseline;
mod features;
mod logistic;
mod predict;

pub use baseline::{evaluate_baseline, score_next_draw};
pub use features::{lagged_features, latest_features, membership_matrix, LaggedDataset, MembershipRow};
pub use logistic::fit_logistic;
pub use predict::{predict_proba, predict_row};
