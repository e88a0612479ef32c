//! Trait for trend fitting

use crate::model::TrendFit;

/// Trait for fitting a linear trend to an indexed series
///
/// Implementations must be total: degenerate input (fewer than two points,
/// zero variance) yields a degenerate fit rather than an error.
pub trait TrendFitter: Send + Sync {
    /// Fit a trend to the series, indexed 0..n.
    fn fit(&self, data: &[f64]) -> TrendFit;
}
