//! Diagnostic functions for fitted classifiers

mod metrics;

pub use metrics::{accuracy, roc_auc};
