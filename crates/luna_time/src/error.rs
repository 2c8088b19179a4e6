//! Error types for time-scale conversions.

use thiserror::Error;

/// Errors from converting a UTC instant into the time scales the ephemeris needs.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Julian Date is NaN or infinite.
    #[error("non-finite Julian Date: {0}")]
    NonFinite(f64),
}
