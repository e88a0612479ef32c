//! Model module containing data structures

mod cost_point;
mod forecast_point;
mod forecast_summary;
mod project_budget;
mod trend_fit;

pub use cost_point::CostPoint;
pub use forecast_point::ForecastPoint;
pub use forecast_summary::{ForecastSummary, RiskLevel, TrendDirection};
pub use project_budget::{BudgetStatus, ProjectActual, ProjectBudget};
pub use trend_fit::TrendFit;
