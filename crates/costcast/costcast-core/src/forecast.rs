//! Forecast generation
//!
//! Projects a daily cost series forward with confidence bands. The trend
//! line is fit on a smoothed copy of the series while residuals are taken
//! against the raw series: smoothing steers the central trend, raw
//! residuals keep real volatility in the bands.

use chrono::Days;
use costcast_spi::{CostPoint, CostcastError, ForecastPoint, Result, Smoother, TrendFitter};

use crate::smoothing::CenteredMovingAverage;
use crate::trend::OlsTrendFitter;

/// Default forward horizon in days.
pub const DEFAULT_FORECAST_DAYS: usize = 30;

/// Default confidence level for the forecast bands.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Smoothing window cap; short histories use `n / 3` instead.
const MAX_SMOOTHING_WINDOW: usize = 7;

/// Minimum history length for fitting a trend.
const MIN_POINTS_FOR_FORECAST: usize = 3;

/// Z-score for a confidence level (approximate).
fn z_score(confidence_level: f64) -> f64 {
    if (confidence_level - 0.99).abs() < 1e-9 {
        2.576
    } else if (confidence_level - 0.95).abs() < 1e-9 {
        1.96
    } else {
        1.645
    }
}

/// Generate a forecast series from a daily cost history.
///
/// The history may be unsorted; it is sorted ascending by date before
/// fitting. With fewer than 3 points no trend is fit and the history is
/// echoed back (in caller order) as plain actual entries.
///
/// Fails with `NonFiniteCost` if any cost is NaN or infinite; that is a
/// caller bug, not a data-quality condition.
pub fn generate_forecast(
    historical: &[CostPoint],
    forecast_days: usize,
    confidence_level: f64,
) -> Result<Vec<ForecastPoint>> {
    for (index, point) in historical.iter().enumerate() {
        if !point.cost.is_finite() {
            return Err(CostcastError::NonFiniteCost {
                index,
                value: point.cost,
            });
        }
    }

    if historical.len() < MIN_POINTS_FOR_FORECAST {
        return Ok(historical
            .iter()
            .map(|p| ForecastPoint::actual(p.date, p.cost))
            .collect());
    }

    let mut sorted = historical.to_vec();
    sorted.sort_by_key(|p| p.date);
    let n = sorted.len();
    let costs: Vec<f64> = sorted.iter().map(|p| p.cost).collect();

    let window = MAX_SMOOTHING_WINDOW.min(n / 3);
    let smoothed = CenteredMovingAverage::new(window)?.smooth(&costs);
    let fit = OlsTrendFitter::new().fit(&smoothed);

    // Residual spread against the raw series; n >= 3 keeps n - 2 positive
    let ss_res: f64 = costs
        .iter()
        .enumerate()
        .map(|(i, &y)| (y - fit.predict_at(i as f64)).powi(2))
        .sum();
    let standard_error = (ss_res / (n - 2) as f64).sqrt();
    let z = z_score(confidence_level);

    let mut points = Vec::with_capacity(n + forecast_days);
    for (i, point) in sorted.iter().enumerate() {
        let predicted = fit.predict_at(i as f64).max(0.0);
        points.push(ForecastPoint::fitted(point.date, point.cost, predicted));
    }

    let last_date = sorted[n - 1].date;
    for i in 1..=forecast_days {
        let date = last_date + Days::new(i as u64);
        let x = (n - 1 + i) as f64;
        let predicted = fit.predict_at(x).max(0.0);
        // Uncertainty grows with the square root of the horizon
        let margin = z * standard_error * (i as f64).sqrt();
        points.push(ForecastPoint::projected(
            date,
            predicted,
            (predicted + margin).max(0.0),
            (predicted - margin).max(0.0),
        ));
    }

    Ok(points)
}
