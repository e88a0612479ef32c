//! Historical cost observation types.

use crate::error::{CostcastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single observed daily cost for a project.
///
/// Produced by the caller's timesheet/expense aggregation. The engine sorts
/// observations by date itself, so callers may supply them in any order.
/// Duplicate dates are treated as distinct observations, not merged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostPoint {
    /// Calendar date of the observation
    pub date: NaiveDate,
    /// Observed cost (non-negative)
    pub cost: f64,
}

impl CostPoint {
    /// Create a new cost point.
    pub fn new(date: NaiveDate, cost: f64) -> Self {
        Self { date, cost }
    }

    /// Create a cost point from an ISO-8601 date string.
    ///
    /// Fails fast on malformed dates and non-finite costs, which are
    /// caller bugs rather than data-quality issues.
    pub fn from_iso(date: &str, cost: f64) -> Result<Self> {
        let date = date
            .parse::<NaiveDate>()
            .map_err(|_| CostcastError::InvalidDate(date.to_string()))?;
        if !cost.is_finite() {
            return Err(CostcastError::NonFiniteCost {
                index: 0,
                value: cost,
            });
        }
        Ok(Self { date, cost })
    }
}
