//! Trait for series smoothing

/// Trait for smoothing a cost series before trend fitting
pub trait Smoother: Send + Sync {
    /// Smooth the series. The output must have the same length as the
    /// input.
    fn smooth(&self, data: &[f64]) -> Vec<f64>;
}
