//! Contract module containing trait definitions for forecasting operations

mod seasonal_decomposer;
mod smoother;
mod trend_fitter;

pub use seasonal_decomposer::SeasonalDecomposer;
pub use smoother::Smoother;
pub use trend_fitter::TrendFitter;
