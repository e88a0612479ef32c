//! Budget analysis
//!
//! Compares actual and projected cost per project against a budget figure
//! and classifies each project's status. Pure and per-project independent,
//! so callers may evaluate projects in parallel.

use std::collections::HashMap;

use costcast_spi::{BudgetStatus, ProjectActual, ProjectBudget};

/// Multiplier applied to actual cost when no budget is supplied.
pub const DEFAULT_BUDGET_MARGIN: f64 = 1.2;

/// Multiplier applied to actual cost when no projection is supplied.
pub const DEFAULT_PROJECTION_MARGIN: f64 = 1.1;

/// Variance percent above which an under-budget project is still at risk.
const AT_RISK_VARIANCE_PERCENT: f64 = -10.0;

/// Analyze a set of projects with the default margin assumptions.
///
/// `budgets` and `projections` are keyed by project name; a missing key
/// means "apply the default multiplier", not an error.
pub fn analyze_budgets(
    actuals: &[ProjectActual],
    budgets: Option<&HashMap<String, f64>>,
    projections: Option<&HashMap<String, f64>>,
) -> Vec<ProjectBudget> {
    analyze_budgets_with(
        actuals,
        budgets,
        projections,
        DEFAULT_BUDGET_MARGIN,
        DEFAULT_PROJECTION_MARGIN,
    )
}

/// Analyze a set of projects with explicit margin assumptions.
pub fn analyze_budgets_with(
    actuals: &[ProjectActual],
    budgets: Option<&HashMap<String, f64>>,
    projections: Option<&HashMap<String, f64>>,
    budget_margin: f64,
    projection_margin: f64,
) -> Vec<ProjectBudget> {
    actuals
        .iter()
        .map(|project| {
            let budgeted_cost = budgets
                .and_then(|m| m.get(&project.project_name).copied())
                .unwrap_or(project.actual_cost * budget_margin);
            let projected_cost = projections
                .and_then(|m| m.get(&project.project_name).copied())
                .unwrap_or(project.actual_cost * projection_margin);

            let variance = projected_cost - budgeted_cost;
            let variance_percent = if budgeted_cost.abs() > 1e-10 {
                variance / budgeted_cost * 100.0
            } else {
                0.0
            };

            let status = if variance > 0.0 {
                BudgetStatus::OverBudget
            } else if variance_percent > AT_RISK_VARIANCE_PERCENT {
                BudgetStatus::AtRisk
            } else {
                BudgetStatus::UnderBudget
            };

            ProjectBudget {
                project_id: project.project_id.clone(),
                project_name: project.project_name.clone(),
                budgeted_cost,
                actual_cost: project.actual_cost,
                projected_cost,
                variance,
                variance_percent,
                status,
            }
        })
        .collect()
}
