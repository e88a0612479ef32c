//! Unit tests for the costcast engine
//!
//! Behavior-level coverage of trend fitting, smoothing, forecasting,
//! summarization, budget analysis, and seasonal factors through the
//! facade API.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use costcast_facade::prelude::*;
use costcast_facade::{smoothing::CenteredMovingAverage, trend, Smoother};

fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap() + Days::new(offset)
}

fn history(costs: &[f64]) -> Vec<CostPoint> {
    costs
        .iter()
        .enumerate()
        .map(|(i, &c)| CostPoint::new(day(i as u64), c))
        .collect()
}

// ============================================================================
// Trend Fitting
// ============================================================================

#[test]
fn trend_r_squared_always_bounded() {
    let series: [&[f64]; 5] = [
        &[],
        &[7.0],
        &[100.0, 100.0, 100.0],
        &[1.0, 2.0, 3.0, 4.0],
        &[10.0, 90.0, 20.0, 80.0, 30.0],
    ];

    for data in series {
        let fit = trend::fit_trend(data);
        assert!(fit.r_squared >= 0.0, "r² below 0 for {:?}", data);
        assert!(fit.r_squared <= 1.0, "r² above 1 for {:?}", data);
    }
}

#[test]
fn trend_degenerate_input_never_panics() {
    assert_eq!(trend::fit_trend(&[]).slope, 0.0);
    assert_eq!(trend::fit_trend(&[5.0]).intercept, 0.0);
}

// ============================================================================
// Smoothing
// ============================================================================

#[test]
fn smoothing_length_invariant_for_any_window() {
    let data: Vec<f64> = (0..37).map(|i| (i as f64 * 1.3).sin() * 50.0 + 100.0).collect();

    for window in [1, 2, 3, 5, 7, 20, 100] {
        let smoother = CenteredMovingAverage::new(window).unwrap();
        assert_eq!(smoother.smooth(&data).len(), data.len());
    }
}

#[test]
fn smoothing_window_one_identity() {
    let data = vec![9.0, 1.0, 7.0, 3.0];
    let smoother = CenteredMovingAverage::new(1).unwrap();
    assert_eq!(smoother.smooth(&data), data);
}

// ============================================================================
// Forecast Generation
// ============================================================================

#[test]
fn forecast_insufficient_data_passthrough() {
    for len in 0..3 {
        let data = history(&vec![100.0; len]);
        let points = generate_forecast(&data, 30, 0.95).unwrap();

        assert_eq!(points.len(), len);
        assert!(points.iter().all(|p| !p.is_forecast));
        assert!(points.iter().all(|p| p.predicted_cost.is_none()));
    }
}

#[test]
fn forecast_band_widens_with_horizon() {
    let data = history(&[120.0, 80.0, 140.0, 90.0, 160.0, 100.0, 170.0, 110.0]);
    let points = generate_forecast(&data, 20, 0.95).unwrap();

    let widths: Vec<f64> = points
        .iter()
        .filter(|p| p.is_forecast)
        .map(|p| p.confidence_upper.unwrap() - p.confidence_lower.unwrap())
        .collect();

    assert_eq!(widths.len(), 20);
    for pair in widths.windows(2) {
        assert!(pair[1] >= pair[0]);
    }
}

#[test]
fn forecast_future_points_shape() {
    let data = history(&[100.0, 105.0, 110.0, 115.0]);
    let points = generate_forecast(&data, 3, 0.95).unwrap();

    for (i, point) in points.iter().filter(|p| p.is_forecast).enumerate() {
        assert_eq!(point.actual_cost, 0.0);
        assert_eq!(point.date, day(3 + 1 + i as u64));
        let predicted = point.predicted_cost.unwrap();
        assert!(point.confidence_upper.unwrap() >= predicted);
        assert!(predicted >= point.confidence_lower.unwrap());
    }
}

// ============================================================================
// Summarization
// ============================================================================

#[test]
fn summary_accuracy_bounded() {
    let noisy = history(&[10.0, 200.0, 30.0, 180.0, 50.0, 170.0]);
    let points = generate_forecast(&noisy, 10, 0.95).unwrap();
    let summary = summarize_forecast(&noisy, &points);

    assert!(summary.forecast_accuracy >= 0.0);
    assert!(summary.forecast_accuracy <= 1.0);
}

#[test]
fn summary_neutral_for_short_history() {
    for len in 0..2 {
        let data = history(&vec![100.0; len]);
        let points = generate_forecast(&data, 30, 0.95).unwrap();
        let summary = summarize_forecast(&data, &points);

        assert_eq!(summary.projected_total_cost, 0.0);
        assert_eq!(summary.current_burn_rate, 0.0);
        assert_eq!(summary.average_daily_cost, 0.0);
        assert_eq!(summary.trend, TrendDirection::Stable);
        assert_eq!(summary.risk_level, RiskLevel::Low);
    }
}

// ============================================================================
// Budget Analysis
// ============================================================================

#[test]
fn budget_zero_variance_is_at_risk() {
    let budgets: HashMap<String, f64> = [("job".to_string(), 1000.0)].into();
    let projections: HashMap<String, f64> = [("job".to_string(), 1000.0)].into();
    let actuals = vec![ProjectActual::new("1", "job", 950.0)];

    let results = analyze_budgets(&actuals, Some(&budgets), Some(&projections));
    assert_eq!(results[0].status, BudgetStatus::AtRisk);
}

#[test]
fn budget_minus_ten_percent_boundary_is_under() {
    let budgets: HashMap<String, f64> = [("job".to_string(), 2000.0)].into();
    let projections: HashMap<String, f64> = [("job".to_string(), 1800.0)].into();
    let actuals = vec![ProjectActual::new("1", "job", 1500.0)];

    let results = analyze_budgets(&actuals, Some(&budgets), Some(&projections));
    assert_eq!(results[0].variance_percent, -10.0);
    assert_eq!(results[0].status, BudgetStatus::UnderBudget);
}

#[test]
fn budget_positive_variance_is_over() {
    let budgets: HashMap<String, f64> = [("job".to_string(), 1000.0)].into();
    let projections: HashMap<String, f64> = [("job".to_string(), 1000.01)].into();
    let actuals = vec![ProjectActual::new("1", "job", 900.0)];

    let results = analyze_budgets(&actuals, Some(&budgets), Some(&projections));
    assert_eq!(results[0].status, BudgetStatus::OverBudget);
}

// ============================================================================
// Seasonal Factors
// ============================================================================

#[test]
fn seasonal_factors_non_negative() {
    let points: Vec<CostPoint> = (0..36)
        .map(|i| {
            let date = NaiveDate::from_ymd_opt(2021, 1, 15).unwrap()
                + chrono::Months::new(i as u32);
            CostPoint::new(date, 100.0 + (i % 12) as f64 * 10.0)
        })
        .collect();

    let factors = monthly_factors(&points, 12);
    assert_eq!(factors.len(), 12);
    assert!(factors.iter().all(|&f| f >= 0.0));
}
