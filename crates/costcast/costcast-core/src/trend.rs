//! Linear trend fitting
//!
//! Ordinary least squares (OLS) over an indexed series. Fits
//! y = intercept + slope * t where t is the time index 0..n.
//!
//! Unlike a general regression routine this fitter is total: degenerate
//! input (fewer than two points, zero time variance) yields a zeroed fit
//! instead of an error, so callers never have to branch on failure.

use costcast_spi::{TrendFit, TrendFitter};

/// OLS trend fitter over integer time indices.
#[derive(Debug, Clone, Copy, Default)]
pub struct OlsTrendFitter;

impl OlsTrendFitter {
    pub fn new() -> Self {
        Self
    }
}

impl TrendFitter for OlsTrendFitter {
    fn fit(&self, data: &[f64]) -> TrendFit {
        fit_trend(data)
    }
}

/// Fit a linear trend to the series, indexed 0..n.
///
/// Returns `TrendFit::degenerate()` for fewer than two points.
pub fn fit_trend(data: &[f64]) -> TrendFit {
    if data.len() < 2 {
        return TrendFit::degenerate();
    }

    let n = data.len() as f64;

    // Time indices: 0, 1, 2, ...
    let sum_t: f64 = (0..data.len()).map(|i| i as f64).sum();
    let sum_y: f64 = data.iter().sum();
    let sum_t2: f64 = (0..data.len()).map(|i| (i * i) as f64).sum();
    let sum_ty: f64 = data.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();

    // OLS formulas
    let denominator = n * sum_t2 - sum_t * sum_t;
    if denominator.abs() < 1e-10 {
        return TrendFit {
            slope: 0.0,
            intercept: sum_y / n,
            r_squared: 0.0,
        };
    }

    let slope = (n * sum_ty - sum_t * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_t) / n;

    let predicted: Vec<f64> = (0..data.len())
        .map(|i| intercept + slope * i as f64)
        .collect();

    TrendFit {
        slope,
        intercept,
        r_squared: r_squared(data, &predicted),
    }
}

/// Coefficient of determination of `predicted` against `actual`,
/// clamped to [0, 1].
///
/// Returns 0 for fewer than two points or mismatched lengths. A
/// zero-variance series scores 1 when the fit is exact and 0 otherwise.
pub fn r_squared(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.len() < 2 {
        return 0.0;
    }

    let n = actual.len() as f64;
    let mean_y = actual.iter().sum::<f64>() / n;
    let ss_tot: f64 = actual.iter().map(|&y| (y - mean_y).powi(2)).sum();
    let ss_res: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(&y, &p)| (y - p).powi(2))
        .sum();

    if ss_tot > 1e-10 {
        (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
    } else if ss_res < 1e-10 {
        1.0
    } else {
        0.0
    }
}
