//! Ephemeris error type.

use luna_time::TimeError;
use thiserror::Error;

/// Errors from an ephemeris query.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Observer location is malformed.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Epoch could not be expressed in the required time scales.
    #[error("invalid epoch: {0}")]
    InvalidEpoch(#[from] TimeError),
    /// Theory produced a non-finite value.
    #[error("non-finite result: {0}")]
    NonFinite(&'static str),
}
