//! Error module containing error types and result aliases

mod costcast_error;

pub use costcast_error::CostcastError;

/// Result type for costcast operations
pub type Result<T> = std::result::Result<T, CostcastError>;
