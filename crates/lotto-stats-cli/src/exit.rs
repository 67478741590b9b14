//! Process exit codes derived from the error category

use std::process::ExitCode;

use lotto_stats_core::StatsError;

/// Exit status reported to the shell
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    Failure = 1,
    Validation = 2,
    Schema = 3,
    Numerical = 4,
    Io = 5,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

/// Convert StatsError to ExitStatus
pub fn status_for(err: &StatsError) -> ExitStatus {
    match err {
        StatsError::InvalidValue { .. }
        | StatsError::EmptyInput { .. }
        | StatsError::InsufficientData { .. }
        | StatsError::InsufficientDataMsg(_)
        | StatsError::DimensionMismatchMsg(_)
        | StatsError::InvalidDraw { .. }
        | StatsError::DuplicateDate(_)
        | StatsError::InvalidDate(_)
        | StatsError::InvalidNumber(_)
        | StatsError::Config(_) => ExitStatus::Validation,
        StatsError::MissingColumn(_) => ExitStatus::Schema,
        StatsError::SingularMatrix
        | StatsError::ConvergenceFailure { .. }
        | StatsError::Distribution(_)
        | StatsError::RegressError(_)
        | StatsError::StatTest(_) => ExitStatus::Numerical,
        StatsError::Io(_) => ExitStatus::Io,
        StatsError::Csv(e) if e.is_io_error() => ExitStatus::Io,
        StatsError::Csv(_) => ExitStatus::Schema,
        StatsError::Spreadsheet(calamine::Error::Io(_)) => ExitStatus::Io,
        StatsError::Spreadsheet(_) => ExitStatus::Schema,
    }
}

/// Exit status for a top-level error; anything not raised by the library is
/// a generic failure
pub fn status_for_error(err: &anyhow::Error) -> ExitStatus {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<StatsError>())
        .map(status_for)
        .unwrap_or(ExitStatus::Failure)
}
