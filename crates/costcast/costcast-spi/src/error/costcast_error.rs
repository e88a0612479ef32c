//! Costcast error types

use thiserror::Error;

/// Errors that can occur during cost forecasting operations
///
/// The engine prefers degenerate output over errors for data-quality
/// conditions (short histories, zero-variance series, missing budget
/// entries). These variants cover contract violations the caller controls
/// directly.
#[derive(Error, Debug)]
pub enum CostcastError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A cost value was NaN or infinite
    #[error("Non-finite cost {value} at index {index}")]
    NonFiniteCost { index: usize, value: f64 },

    /// A date string could not be parsed as an ISO-8601 calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),
}
