//! Seasonal decomposition
//!
//! Derives month-of-year multiplicative factors from a multi-year cost
//! history. Factors are bucket means divided by the grand mean, so they
//! average to roughly 1 when every bucket is populated.

use chrono::Datelike;
use costcast_spi::{CostPoint, SeasonalDecomposer};

/// Default number of seasonal periods (calendar months).
pub const DEFAULT_PERIODS: usize = 12;

/// Month-of-year seasonal decomposer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlyDecomposer;

impl MonthlyDecomposer {
    pub fn new() -> Self {
        Self
    }
}

impl SeasonalDecomposer for MonthlyDecomposer {
    fn factors(&self, points: &[CostPoint], periods: usize) -> Vec<f64> {
        monthly_factors(points, periods)
    }
}

/// Compute `periods` multiplicative seasonal factors.
///
/// With fewer than `periods * 2` observations there is not enough data to
/// decompose and a uniform factor array is returned. Buckets with no
/// observations keep a mean of 0 rather than being imputed.
pub fn monthly_factors(points: &[CostPoint], periods: usize) -> Vec<f64> {
    if periods == 0 {
        return Vec::new();
    }
    if points.len() < periods * 2 {
        return vec![1.0; periods];
    }

    let mut sums = vec![0.0; periods];
    let mut counts = vec![0usize; periods];
    for point in points {
        let bucket = point.date.month0() as usize % periods;
        sums[bucket] += point.cost;
        counts[bucket] += 1;
    }

    let means: Vec<f64> = sums
        .iter()
        .zip(counts.iter())
        .map(|(&sum, &count)| if count > 0 { sum / count as f64 } else { 0.0 })
        .collect();

    let grand_mean = means.iter().sum::<f64>() / periods as f64;
    if grand_mean.abs() < 1e-10 {
        return means;
    }

    means.iter().map(|&mean| mean / grand_mean).collect()
}
