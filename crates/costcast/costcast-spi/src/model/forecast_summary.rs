//! Forecast summary types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of the cost trend over the observed history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Second-half mean more than 10% above first-half mean
    Increasing,
    /// Second-half mean more than 10% below first-half mean
    Decreasing,
    /// Within the ±10% band
    Stable,
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
        };
        write!(f, "{}", s)
    }
}

/// Budget-risk classification derived from trend and fit quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// Headline numbers derived from a cost history and its forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    /// Sum of observed costs plus all projected future costs
    pub projected_total_cost: f64,
    /// Last observed date plus a fixed 30-day horizon, independent of the
    /// forecast length used to generate the projection
    pub projected_end_date: NaiveDate,
    /// Mean cost of the last 7 observations (or fewer)
    pub current_burn_rate: f64,
    /// Mean cost over the whole history
    pub average_daily_cost: f64,
    /// R-squared of fitted vs observed costs, in [0, 1]
    pub forecast_accuracy: f64,
    /// Direction of spend over the history
    pub trend: TrendDirection,
    /// Budget-risk classification
    pub risk_level: RiskLevel,
}

impl ForecastSummary {
    /// Neutral summary returned when there is not enough history to
    /// analyze: all numbers zero, stable trend, low risk.
    pub fn neutral(as_of: NaiveDate) -> Self {
        Self {
            projected_total_cost: 0.0,
            projected_end_date: as_of,
            current_burn_rate: 0.0,
            average_daily_cost: 0.0,
            forecast_accuracy: 0.0,
            trend: TrendDirection::Stable,
            risk_level: RiskLevel::Low,
        }
    }
}
