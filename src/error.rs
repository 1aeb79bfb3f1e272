//! Error types for the KPI reporter.

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, KpiError>;

/// Errors that can occur while running the reporting pipeline.
#[derive(Error, Debug)]
pub enum KpiError {
    /// Failed to read the input file or write the report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV structure error (unreadable header or malformed framing)
    #[error("CSV format error: {0}")]
    Csv(#[from] csv::Error),

    /// Too many command line arguments
    #[error("Too many arguments. Usage: retail-kpi [input.csv] [report.md]")]
    Usage,
}
