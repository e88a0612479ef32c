//! Costcast Consumer API
//!
//! Consumer configurations and convenience entry points for the cost
//! forecasting engine.
//!
//! This crate provides:
//! - Configuration types with sensible defaults
//! - Thin delegation to the core implementations
//! - Re-exports from SPI and core for convenience

use std::collections::HashMap;

// Re-export from core
pub use costcast_core::{
    analyze_budgets, generate_forecast, monthly_factors, summarize_forecast,
    CenteredMovingAverage, MonthlyDecomposer, OlsTrendFitter,
};

// Re-export models and traits from SPI
pub use costcast_spi::{
    BudgetStatus, CostPoint, CostcastError, ForecastPoint, ForecastSummary, ProjectActual,
    ProjectBudget, Result, RiskLevel, SeasonalDecomposer, Smoother, TrendDirection, TrendFit,
    TrendFitter,
};

use serde::{Deserialize, Serialize};

/// Configuration for forecast generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Number of days to project forward
    pub forecast_days: usize,
    /// Confidence level for the bands (0.90, 0.95, or 0.99)
    pub confidence_level: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            forecast_days: costcast_core::forecast::DEFAULT_FORECAST_DAYS,
            confidence_level: costcast_core::forecast::DEFAULT_CONFIDENCE_LEVEL,
        }
    }
}

impl ForecastConfig {
    pub fn new(forecast_days: usize) -> Self {
        Self {
            forecast_days,
            ..Self::default()
        }
    }

    pub fn with_confidence(forecast_days: usize, confidence_level: f64) -> Self {
        Self {
            forecast_days,
            confidence_level,
        }
    }

    /// Generate a forecast for the given history.
    pub fn generate(&self, historical: &[CostPoint]) -> Result<Vec<ForecastPoint>> {
        costcast_core::generate_forecast(historical, self.forecast_days, self.confidence_level)
    }
}

/// Configuration for seasonal decomposition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalConfig {
    /// Number of seasonal periods per cycle
    pub periods: usize,
}

impl Default for SeasonalConfig {
    fn default() -> Self {
        Self {
            periods: costcast_core::seasonal::DEFAULT_PERIODS,
        }
    }
}

impl SeasonalConfig {
    pub fn new(periods: usize) -> Self {
        Self { periods }
    }

    /// Compute seasonal factors for the given history.
    pub fn factors(&self, points: &[CostPoint]) -> Vec<f64> {
        costcast_core::monthly_factors(points, self.periods)
    }
}

/// Margin assumptions applied when a project has no supplied budget or
/// projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetAssumptions {
    /// Budget multiplier over actual cost when no budget is known
    pub budget_margin: f64,
    /// Projection multiplier over actual cost when no projection is known
    pub projection_margin: f64,
}

impl Default for BudgetAssumptions {
    fn default() -> Self {
        Self {
            budget_margin: costcast_core::budget::DEFAULT_BUDGET_MARGIN,
            projection_margin: costcast_core::budget::DEFAULT_PROJECTION_MARGIN,
        }
    }
}

impl BudgetAssumptions {
    /// Analyze projects with these margin assumptions.
    pub fn analyze(
        &self,
        actuals: &[ProjectActual],
        budgets: Option<&HashMap<String, f64>>,
        projections: Option<&HashMap<String, f64>>,
    ) -> Vec<ProjectBudget> {
        costcast_core::analyze_budgets_with(
            actuals,
            budgets,
            projections,
            self.budget_margin,
            self.projection_margin,
        )
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{BudgetAssumptions, ForecastConfig, SeasonalConfig};
    pub use costcast_core::{
        analyze_budgets, generate_forecast, monthly_factors, summarize_forecast,
    };
    pub use costcast_spi::{
        BudgetStatus, CostPoint, CostcastError, ForecastPoint, ForecastSummary, ProjectActual,
        ProjectBudget, Result, RiskLevel, TrendDirection,
    };
}
