//! Forecast summarization
//!
//! Derives burn rate, trend direction, risk classification, and projected
//! totals from a cost history and its generated forecast.

use chrono::{Days, Utc};
use costcast_spi::{CostPoint, ForecastPoint, ForecastSummary, RiskLevel, TrendDirection};

use crate::trend::r_squared;

/// Fixed horizon for the reported end date. Deliberately independent of
/// the forecast length used to generate the projection, so summaries stay
/// comparable across calls with different horizons.
const END_DATE_HORIZON_DAYS: u64 = 30;

/// Observations in the burn-rate window.
const BURN_RATE_WINDOW: usize = 7;

/// Half-split percent change beyond which the trend is directional.
const TREND_THRESHOLD: f64 = 0.10;

/// Percent change above which an increasing trend is high risk.
const HIGH_RISK_THRESHOLD: f64 = 0.30;

/// Fit quality below which risk is at least medium.
const ACCURACY_FLOOR: f64 = 0.7;

/// Summarize a cost history and its forecast.
///
/// With fewer than 2 historical points returns a neutral summary dated
/// today, the engine's only wall-clock read.
pub fn summarize_forecast(
    historical: &[CostPoint],
    points: &[ForecastPoint],
) -> ForecastSummary {
    if historical.len() < 2 {
        return ForecastSummary::neutral(Utc::now().date_naive());
    }

    let mut sorted = historical.to_vec();
    sorted.sort_by_key(|p| p.date);
    let n = sorted.len();
    let costs: Vec<f64> = sorted.iter().map(|p| p.cost).collect();

    let total_actual: f64 = costs.iter().sum();
    let average_daily_cost = total_actual / n as f64;

    let burn_window = BURN_RATE_WINDOW.min(n);
    let current_burn_rate =
        costs[n - burn_window..].iter().sum::<f64>() / burn_window as f64;

    let projected_future: f64 = points
        .iter()
        .filter(|p| p.is_forecast)
        .filter_map(|p| p.predicted_cost)
        .sum();
    let projected_total_cost = total_actual + projected_future;

    // Half-split by count, not date-weighted
    let half = n / 2;
    let first_mean = costs[..half].iter().sum::<f64>() / half as f64;
    let second_mean = costs[half..].iter().sum::<f64>() / (n - half) as f64;
    let percent_change = if first_mean.abs() > 1e-10 {
        (second_mean - first_mean) / first_mean
    } else {
        0.0
    };

    let trend = if percent_change > TREND_THRESHOLD {
        TrendDirection::Increasing
    } else if percent_change < -TREND_THRESHOLD {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    };

    let (actuals, fitted): (Vec<f64>, Vec<f64>) = points
        .iter()
        .filter(|p| !p.is_forecast)
        .filter_map(|p| p.predicted_cost.map(|pred| (p.actual_cost, pred)))
        .unzip();
    let forecast_accuracy = r_squared(&actuals, &fitted);

    let risk_level = if trend == TrendDirection::Increasing
        && percent_change > HIGH_RISK_THRESHOLD
    {
        RiskLevel::High
    } else if trend == TrendDirection::Increasing || forecast_accuracy < ACCURACY_FLOOR {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    ForecastSummary {
        projected_total_cost,
        projected_end_date: sorted[n - 1].date + Days::new(END_DATE_HORIZON_DAYS),
        current_burn_rate,
        average_daily_cost,
        forecast_accuracy,
        trend,
        risk_level,
    }
}
