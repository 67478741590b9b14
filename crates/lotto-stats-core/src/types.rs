use serde::{Deserialize, Serialize};

/// Smallest number that can be drawn
pub const NUMBER_MIN: u8 = 1;
/// Largest number that can be drawn
pub const NUMBER_MAX: u8 = 50;
/// Size of the number pool (1..=50)
pub const NUMBER_COUNT: usize = 50;
/// Main numbers per draw
pub const MAIN_NUMBERS: usize = 7;
/// Numbers at or below this value are "low", above it "high"
pub const LOW_HIGH_SPLIT: u8 = 25;
/// C(7, 2)
pub const PAIRS_PER_DRAW: usize = 21;
/// C(7, 3)
pub const TRIPLETS_PER_DRAW: usize = 35;

/// Whether `number` lies in the drawable range
pub fn in_range(number: u8) -> bool {
    (NUMBER_MIN..=NUMBER_MAX).contains(&number)
}

/// One row of a ranked frequency table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberCount {
    pub number: u8,
    pub count: u32,
}

/// Occurrence counts for observed numbers, ranked by count descending then
/// number ascending. Numbers with a zero count are not listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    rows: Vec<NumberCount>,
}

impl FrequencyTable {
    /// Build a ranked table from `(number, count)` pairs, skipping zero counts
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (u8, u32)>,
    {
        let mut rows: Vec<NumberCount> = counts
            .into_iter()
            .filter(|&(_, count)| count > 0)
            .map(|(number, count)| NumberCount { number, count })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count).then(a.number.cmp(&b.number)));
        Self { rows }
    }

    pub fn rows(&self) -> &[NumberCount] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Count for `number`, zero when it was never observed
    pub fn get(&self, number: u8) -> u32 {
        self.rows
            .iter()
            .find(|row| row.number == number)
            .map(|row| row.count)
            .unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.rows.iter().map(|row| u64::from(row.count)).sum()
    }

    /// Counts for every number 1..=50 in number order, zero-filled
    pub fn zero_filled(&self) -> Vec<u32> {
        let mut counts = vec![0u32; NUMBER_COUNT];
        for row in &self.rows {
            if in_range(row.number) {
                counts[usize::from(row.number - NUMBER_MIN)] = row.count;
            }
        }
        counts
    }
}

/// Co-occurrence count for an unordered pair (`num1 < num2`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairCount {
    pub num1: u8,
    pub num2: u8,
    pub count: u32,
}

impl PairCount {
    pub fn contains(&self, number: u32) -> bool {
        u32::from(self.num1) == number || u32::from(self.num2) == number
    }
}

/// Co-occurrence count for an unordered triplet (`num1 < num2 < num3`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripletCount {
    pub num1: u8,
    pub num2: u8,
    pub num3: u8,
    pub count: u32,
}

impl TripletCount {
    pub fn contains(&self, number: u32) -> bool {
        u32::from(self.num1) == number
            || u32::from(self.num2) == number
            || u32::from(self.num3) == number
    }
}

/// Thresholds used by the randomness test suite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomnessOptions {
    /// Significance level for the chi-square and runs tests
    pub alpha: f64,
    /// |r| at or above this flags serial correlation
    pub correlation_threshold: f64,
    /// Maximum distance (in bits) from log2(50) still counted as near maximal
    pub entropy_tolerance: f64,
}

impl Default for RandomnessOptions {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            correlation_threshold: 0.05,
            entropy_tolerance: 0.1,
        }
    }
}

/// Options for L2-regularised logistic regression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogisticOptions {
    /// Inverse regularisation strength (must be > 0)
    pub c: f64,
    /// Whether to fit an unpenalised intercept
    pub fit_intercept: bool,
    /// Maximum IRLS iterations
    pub max_iterations: u32,
    /// IRLS convergence tolerance
    pub tolerance: f64,
}

impl Default for LogisticOptions {
    fn default() -> Self {
        Self {
            c: 1.0,
            fit_intercept: true,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

/// Fitted logistic regression model
#[derive(Debug, Clone)]
pub struct LogisticFitResult {
    /// Coefficients (excluding intercept)
    pub coefficients: Vec<f64>,
    /// Intercept term (if fitted with intercept)
    pub intercept: Option<f64>,
    /// Set when the training labels held a single class; the model then
    /// predicts this probability for every row
    pub fixed_probability: Option<f64>,
    /// Number of observations used
    pub n_observations: usize,
    /// Number of features (excluding intercept)
    pub n_features: usize,
    /// IRLS iterations performed
    pub iterations: u32,
}

/// Options for the per-number next-draw baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineOptions {
    /// Number of previous draws used as features
    pub n_lags: usize,
    /// Trailing rows held out for evaluation
    pub test_size: usize,
    /// Probability above which membership is predicted
    pub threshold: f64,
    pub logistic: LogisticOptions,
}

impl Default for BaselineOptions {
    fn default() -> Self {
        Self {
            n_lags: 1,
            test_size: 20,
            threshold: 0.5,
            logistic: LogisticOptions::default(),
        }
    }
}

/// Held-out metrics for one number's classifier
#[derive(Debug, Clone, PartialEq)]
pub struct NumberMetrics {
    pub number: u8,
    pub accuracy: f64,
    /// `None` when the test labels contain a single class
    pub roc_auc: Option<f64>,
}

/// Result of evaluating the per-number baseline
#[derive(Debug, Clone)]
pub struct BaselineReport {
    pub per_number: Vec<NumberMetrics>,
    pub mean_accuracy: f64,
    /// Mean over numbers with a defined ROC-AUC
    pub mean_roc_auc: Option<f64>,
    pub n_train: usize,
    pub n_test: usize,
    pub n_lags: usize,
}

/// Probability that a number appears in the next draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NextDrawScore {
    pub number: u8,
    pub probability: f64,
}
