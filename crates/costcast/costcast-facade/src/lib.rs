//! Costcast Facade
//!
//! High-level API for the cost forecasting and budget-risk engine.
//! Re-exports all public types from the costcast stack for convenient
//! usage.

// Re-export everything from API (which includes SPI and core)
pub use costcast_api::*;

// Explicit re-exports for documentation
pub use costcast_api::prelude;

// Re-export core modules for direct access
pub use costcast_core::{budget, forecast, seasonal, smoothing, summary, trend};

// Re-export SPI traits
pub use costcast_spi::{SeasonalDecomposer, Smoother, TrendFitter};
