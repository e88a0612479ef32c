//! Linear trend fit result.

use serde::{Deserialize, Serialize};

/// Result of fitting a linear trend y = intercept + slope * t.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendFit {
    /// Trend per time unit
    pub slope: f64,
    /// Y-intercept
    pub intercept: f64,
    /// Coefficient of determination, clamped to [0, 1]
    pub r_squared: f64,
}

impl TrendFit {
    /// A degenerate fit: flat line at zero with no explanatory power.
    pub fn degenerate() -> Self {
        Self {
            slope: 0.0,
            intercept: 0.0,
            r_squared: 0.0,
        }
    }

    /// Predict the value at time index `t`.
    pub fn predict_at(&self, t: f64) -> f64 {
        self.intercept + self.slope * t
    }
}
