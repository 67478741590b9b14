use thiserror::Error;

/// Errors that can occur while loading draws or computing statistics
#[derive(Error, Debug)]
pub enum StatsError {
    // Input validation errors
    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },

    #[error("Empty input: {field} cannot be empty")]
    EmptyInput { field: &'static str },

    #[error("Insufficient data: {rows} rows, {needed} needed")]
    InsufficientData { rows: usize, needed: usize },

    #[error("Insufficient data: {0}")]
    InsufficientDataMsg(String),

    #[error("Dimension mismatch: {0}")]
    DimensionMismatchMsg(String),

    // Draw table errors
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid draw on {date}: {message}")]
    InvalidDraw { date: String, message: String },

    #[error("Draw for {0} already exists")]
    DuplicateDate(String),

    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid number '{0}' (expected an integer)")]
    InvalidNumber(String),

    // Numerical errors
    #[error("Matrix is singular or near-singular")]
    SingularMatrix,

    #[error("Logistic fit failed to converge after {iterations} iterations (tolerance: {tolerance})")]
    ConvergenceFailure { iterations: u32, tolerance: f64 },

    #[error("Distribution error: {0}")]
    Distribution(String),

    #[error("Regression error: {0}")]
    RegressError(String),

    #[error("Statistical test error: {0}")]
    StatTest(String),

    // Configuration and I/O
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),
}

/// Result type for draw loading and statistical operations
pub type StatsResult<T> = Result<T, StatsError>;
