//! Basic example demonstrating the cost forecasting engine
//!
//! Run with: cargo run --example basic -p costcast-facade

use costcast_facade::prelude::*;
use costcast_facade::ForecastConfig;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== costcast Basic Examples ===\n");

    // Three weeks of daily project spend with a mild upward drift
    let history: Vec<CostPoint> = (0..21)
        .map(|i| {
            let date = format!("2024-05-{:02}", i + 1);
            let cost = 1800.0 + i as f64 * 25.0 + ((i % 7) as f64 - 3.0) * 60.0;
            CostPoint::from_iso(&date, cost)
        })
        .collect::<Result<_>>()?;

    // 1. Forecast with confidence bands
    println!("1. Forecast (14 days, 95% confidence)");
    let points = ForecastConfig::with_confidence(14, 0.95).generate(&history)?;
    for point in points.iter().filter(|p| p.is_forecast).take(5) {
        println!(
            "   {}  predicted {:8.2}  band [{:8.2}, {:8.2}]",
            point.date,
            point.predicted_cost.unwrap_or(0.0),
            point.confidence_lower.unwrap_or(0.0),
            point.confidence_upper.unwrap_or(0.0),
        );
    }

    // 2. Summary
    println!("\n2. Summary");
    let summary = summarize_forecast(&history, &points);
    println!("   Burn rate:        {:.2}/day", summary.current_burn_rate);
    println!("   Average cost:     {:.2}/day", summary.average_daily_cost);
    println!("   Projected total:  {:.2}", summary.projected_total_cost);
    println!("   Trend:            {}", summary.trend);
    println!("   Risk:             {}", summary.risk_level);

    // 3. Budget analysis with default margins
    println!("\n3. Budget Analysis");
    let actuals = vec![ProjectActual::new("p-1", "Riverside Tower", 42_000.0)];
    for budget in analyze_budgets(&actuals, None, None) {
        println!(
            "   {}: budgeted {:.0}, projected {:.0}, variance {:.0} ({})",
            budget.project_name,
            budget.budgeted_cost,
            budget.projected_cost,
            budget.variance,
            budget.status,
        );
    }

    Ok(())
}
