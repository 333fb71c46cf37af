use thiserror::Error;

/// Failures the metrics engine can report to its callers.
///
/// Empty datasets are never errors; aggregations return zero-valued results
/// instead. Undefined ratios (salary not positive) are modelled as `None`
/// fields on [`crate::Summary`], not as errors — composing a report is the
/// one operation that requires the baseline outright.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("report requires a positive salary baseline")]
    UndefinedBudget,
    #[error("report field missing: {0}")]
    MissingReportField(&'static str),
}
