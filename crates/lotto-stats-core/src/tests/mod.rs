//! Randomness tests over the flattened stream of drawn main numbers
//!
//! Each test is independent and side-effect free:
//! - Chi-square goodness-of-fit against a uniform 1..=50 distribution
//! - Runs test on the low/high binarised sequence
//! - Lag-1 serial correlation
//! - Shannon entropy of the empirical distribution


pub use entropy::{entropy_test, EntropyResult};
pub use goodness_of_fit::{chisq_uniformity, ChiSquareResult};
pub use runs::{count_runs, runs_test, RunsTestResult};
pub use serial::{serial_correlation, SerialCorrelationResult};

use crate::draws::DrawStore;
use crate::types::RandomnessOptions;
use crate::{StatsError, StatsResult};
use anofox_tests::StatError;

/// Convert errors raised by `anofox_tests` into `StatsError`
pub(crate) fn convert_error(e: StatError) -> StatsError {
    match e {
        StatError::InsufficientData { needed, got } => StatsError::InsufficientData { rows: got, needed },
        other => StatsError::StatTest(other.to_string()),
    }
}

/// Which test to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomnessTest {
    ChiSquare,
    Runs,
    SerialCorrelation,
    Entropy,
}

impl RandomnessTest {
    pub const ALL: [RandomnessTest; 4] = [
        RandomnessTest::ChiSquare,
        RandomnessTest::Runs,
        RandomnessTest::SerialCorrelation,
        RandomnessTest::Entropy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RandomnessTest::ChiSquare => "Chi-square test",
            RandomnessTest::Runs => "Runs test (high/low)",
            RandomnessTest::SerialCorrelation => "Serial correlation test",
            RandomnessTest::Entropy => "Entropy test",
        }
    }
}

/// Outcome of one randomness test
#[derive(Debug, Clone)]
pub enum RandomnessOutcome {
    ChiSquare(ChiSquareResult),
    Runs(RunsTestResult),
    SerialCorrelation(SerialCorrelationResult),
    Entropy(EntropyResult),
}

impl RandomnessOutcome {
    /// Whether the test found the sequence consistent with randomness
    pub fn consistent_with_randomness(&self) -> bool {
        match self {
            RandomnessOutcome::ChiSquare(r) => !r.reject,
            RandomnessOutcome::Runs(r) => !r.reject,
            RandomnessOutcome::SerialCorrelation(r) => !r.significant,
            RandomnessOutcome::Entropy(r) => r.near_maximal,
        }
    }
}

/// Run one test against an already flattened sequence
pub fn run_test(
    test: RandomnessTest,
    numbers: &[u8],
    options: &RandomnessOptions,
) -> StatsResult<RandomnessOutcome> {
    let outcome = match test {
        RandomnessTest::ChiSquare => RandomnessOutcome::ChiSquare(chisq_uniformity(numbers, options)?),
        RandomnessTest::Runs => RandomnessOutcome::Runs(runs_test(numbers, options)?),
        RandomnessTest::SerialCorrelation => {
            RandomnessOutcome::SerialCorrelation(serial_correlation(numbers, options)?)
        }
        RandomnessTest::Entropy => RandomnessOutcome::Entropy(entropy_test(numbers, options)?),
    };
    tracing::debug!(
        test = test.name(),
        consistent = outcome.consistent_with_randomness(),
        "ran randomness test"
    );
    Ok(outcome)
}

/// Run one test against the main numbers of a store
pub fn run_on_store(
    test: RandomnessTest,
    store: &DrawStore,
    options: &RandomnessOptions,
) -> StatsResult<RandomnessOutcome> {
    run_test(test, &store.flattened_main(), options)
}
