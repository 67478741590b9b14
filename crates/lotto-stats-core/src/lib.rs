//! lotto-stats-core: Draw-history analysis for a 7-of-50 lottery
//!
//! This crate loads a cleaned draw table into a validated store and runs
//! independent engines over it:
//! - Number frequencies (main, bonus, combined)
//! - Pair and triplet co-occurrence with per-number queries
//! - Randomness tests (chi-square, runs, serial correlation, entropy)
//! - A per-number logistic baseline for next-draw membership

pub mod analysis;
pub mod config;
pub mod diagnostics;
pub mod draws;
pub mod errors;
pub mod export;
pub mod models;
pub mod tests;
pub mod types;

pub use errors::{StatsError, StatsResult};
pub use types::*;
