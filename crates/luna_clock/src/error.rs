//! Error type for lunar clock computations.

use luna_ephem::EphemerisError;
use luna_time::TimeError;
use thiserror::Error;

/// Errors from computing a lunar day or moon phase.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ClockError {
    /// The ephemeris rejected the location or instant.
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
    /// The instant could not be converted to ephemeris time.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// The ephemeris returned a value outside its documented range.
    #[error("invalid ephemeris reading: {0}")]
    InvalidReading(&'static str),
}
