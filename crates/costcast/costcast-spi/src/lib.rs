//! Costcast Service Provider Interface
//!
//! Defines the data models, error types, and trait contracts for the cost
//! forecasting and budget-risk engine.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{SeasonalDecomposer, Smoother, TrendFitter};
pub use error::{CostcastError, Result};
pub use model::{
    BudgetStatus, CostPoint, ForecastPoint, ForecastSummary, ProjectActual, ProjectBudget,
    RiskLevel, TrendDirection, TrendFit,
};
