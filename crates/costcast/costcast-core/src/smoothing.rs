//! Series smoothing
//!
//! Centered moving average used to denoise a cost series before trend
//! fitting. The window shrinks at the boundaries instead of wrapping or
//! zero-padding, so the output always has the same length as the input.

use costcast_spi::{CostcastError, Result, Smoother};

/// Centered moving-average smoother.
///
/// For each index i the window covers
/// `[max(0, i - w/2), min(len, i + ceil(w/2)))`. A window of 1 is the
/// identity transform.
#[derive(Debug, Clone, Copy)]
pub struct CenteredMovingAverage {
    window: usize,
}

impl CenteredMovingAverage {
    /// Create a smoother with the given window size.
    ///
    /// Fails with `InvalidParameter` when `window` is 0.
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(CostcastError::InvalidParameter {
                name: "window".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(Self { window })
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl Smoother for CenteredMovingAverage {
    fn smooth(&self, data: &[f64]) -> Vec<f64> {
        let half = self.window / 2;
        let half_up = self.window - half;

        (0..data.len())
            .map(|i| {
                let start = i.saturating_sub(half);
                let end = (i + half_up).min(data.len());
                let slice = &data[start..end];
                slice.iter().sum::<f64>() / slice.len() as f64
            })
            .collect()
    }
}
