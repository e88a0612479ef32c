//! Project budget types.

use serde::{Deserialize, Serialize};

/// Budget status classification for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Projected cost is more than 10% under the budget
    UnderBudget,
    /// Projected cost exceeds the budget
    OverBudget,
    /// Projected cost is within 10% under the budget
    AtRisk,
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BudgetStatus::UnderBudget => "under_budget",
            BudgetStatus::OverBudget => "over_budget",
            BudgetStatus::AtRisk => "at_risk",
        };
        write!(f, "{}", s)
    }
}

/// Current actual spend for one project, input to budget analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectActual {
    /// Stable project identifier
    pub project_id: String,
    /// Display name; budget and projection maps are keyed by this
    pub project_name: String,
    /// Actual cost to date
    pub actual_cost: f64,
}

impl ProjectActual {
    pub fn new(
        project_id: impl Into<String>,
        project_name: impl Into<String>,
        actual_cost: f64,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            project_name: project_name.into(),
            actual_cost,
        }
    }
}

/// Budget analysis result for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectBudget {
    /// Stable project identifier
    pub project_id: String,
    /// Display name
    pub project_name: String,
    /// Budget figure (supplied, or actual * 1.2 when unknown)
    pub budgeted_cost: f64,
    /// Actual cost to date
    pub actual_cost: f64,
    /// Projected final cost (supplied, or actual * 1.1 when unknown)
    pub projected_cost: f64,
    /// projected_cost - budgeted_cost
    pub variance: f64,
    /// variance / budgeted_cost * 100
    pub variance_percent: f64,
    /// Classification of the variance
    pub status: BudgetStatus,
}
