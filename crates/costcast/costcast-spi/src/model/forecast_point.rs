//! Forecast point types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry in a forecast series, either observed or projected.
///
/// Invariants: historical entries have `is_forecast == false`; generated
/// future entries have `is_forecast == true` and `actual_cost == 0`.
/// `predicted_cost`, when present, is clamped to be non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Calendar date of the entry
    pub date: NaiveDate,
    /// Observed cost (0 for future dates)
    pub actual_cost: f64,
    /// Fitted or projected cost, absent when no trend was fitted
    pub predicted_cost: Option<f64>,
    /// Upper bound of the confidence band (future entries only)
    pub confidence_upper: Option<f64>,
    /// Lower bound of the confidence band (future entries only)
    pub confidence_lower: Option<f64>,
    /// Whether this entry is a generated future projection
    pub is_forecast: bool,
}

impl ForecastPoint {
    /// Create a historical entry with no fitted prediction.
    pub fn actual(date: NaiveDate, actual_cost: f64) -> Self {
        Self {
            date,
            actual_cost,
            predicted_cost: None,
            confidence_upper: None,
            confidence_lower: None,
            is_forecast: false,
        }
    }

    /// Create a historical entry with a fitted prediction.
    pub fn fitted(date: NaiveDate, actual_cost: f64, predicted_cost: f64) -> Self {
        Self {
            date,
            actual_cost,
            predicted_cost: Some(predicted_cost),
            confidence_upper: None,
            confidence_lower: None,
            is_forecast: false,
        }
    }

    /// Create a projected future entry with its confidence band.
    pub fn projected(date: NaiveDate, predicted_cost: f64, upper: f64, lower: f64) -> Self {
        Self {
            date,
            actual_cost: 0.0,
            predicted_cost: Some(predicted_cost),
            confidence_upper: Some(upper),
            confidence_lower: Some(lower),
            is_forecast: true,
        }
    }

    /// Width of the confidence band, if both bounds are present.
    pub fn band_width(&self) -> Option<f64> {
        match (self.confidence_upper, self.confidence_lower) {
            (Some(upper), Some(lower)) => Some(upper - lower),
            _ => None,
        }
    }
}
