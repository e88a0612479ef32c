//! Costcast Core
//!
//! Core implementations for cost trend fitting, smoothing, forecast
//! generation, forecast summaries, budget analysis, and seasonal
//! decomposition.

pub mod budget;
pub mod forecast;
pub mod seasonal;
pub mod smoothing;
pub mod summary;
pub mod trend;

// Re-export SPI types for implementations
pub use costcast_spi::{
    BudgetStatus, CostPoint, CostcastError, ForecastPoint, ForecastSummary, ProjectActual,
    ProjectBudget, Result, RiskLevel, SeasonalDecomposer, Smoother, TrendDirection, TrendFit,
    TrendFitter,
};

// Re-export main entry points
pub use budget::{analyze_budgets, analyze_budgets_with};
pub use forecast::generate_forecast;
pub use seasonal::{monthly_factors, MonthlyDecomposer};
pub use smoothing::CenteredMovingAverage;
pub use summary::summarize_forecast;
pub use trend::OlsTrendFitter;
