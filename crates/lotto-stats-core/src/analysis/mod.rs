//! Counting engines over the draw store
//!
//! - Number frequencies (main, bonus, combined)
//! - Pair and triplet co-occurrence

pub mod cooccurrence;
pub mod frequency;

pub use cooccurrence::{build_cooccurrence, BestMatch, CooccurrenceTables, NumberCombinations};
pub use frequency::{
    bonus_frequencies, combined_frequencies, frequency_report, main_frequencies,
    observed_counts, FrequencyReport,
};
