//! Time-scale conversions for the lunar clock.
//!
//! This crate provides:
//! - calendar → Julian Date conversion
//! - a compiled-in leap-second table, with ΔT before 1972
//! - the UTC → TT offset
//! - mean sidereal time
//! - an [`Epoch`] type carrying one instant in every scale the ephemeris needs

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod leap;
pub mod scales;
pub mod sidereal;

use chrono::{DateTime, Utc};

pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_centuries,
};
pub use leap::tai_minus_utc;
pub use scales::tt_minus_utc_s;
pub use sidereal::{gmst_rad, local_sidereal_time_rad};

/// One instant, expressed as UTC and TT Julian Dates.
///
/// UTC (taken as UT) drives Earth rotation; TT drives the Sun and Moon
/// theories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Epoch {
    jd_utc: f64,
    jd_tt: f64,
}

impl Epoch {
    /// Create an epoch from a UTC Julian Date.
    pub fn from_jd_utc(jd_utc: f64) -> Result<Self, TimeError> {
        if !jd_utc.is_finite() {
            return Err(TimeError::NonFinite(jd_utc));
        }
        let jd_tt = jd_utc + tt_minus_utc_s(jd_utc) / SECONDS_PER_DAY;
        Ok(Self { jd_utc, jd_tt })
    }

    /// Create an epoch from a chrono UTC timestamp.
    pub fn from_utc(at: DateTime<Utc>) -> Result<Self, TimeError> {
        let seconds = at.timestamp() as f64 + f64::from(at.timestamp_subsec_nanos()) * 1e-9;
        Self::from_jd_utc(UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY)
    }

    /// Julian Date in UTC.
    pub fn jd_utc(self) -> f64 {
        self.jd_utc
    }

    /// Julian Date in TT.
    pub fn jd_tt(self) -> f64 {
        self.jd_tt
    }

    /// Julian centuries of TT since J2000.0.
    pub fn centuries_tt(self) -> f64 {
        jd_to_centuries(self.jd_tt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn pre_1972_uses_delta_t() {
        // Apollo 11 landing
        let at = Utc.with_ymd_and_hms(1969, 7, 20, 20, 17, 0).unwrap();
        let epoch = Epoch::from_utc(at).unwrap();
        let offset_s = (epoch.jd_tt() - epoch.jd_utc()) * SECONDS_PER_DAY;
        assert!((offset_s - 39.8).abs() < 0.5, "TT - UTC = {offset_s}");
    }

    #[test]
    fn nan_rejected() {
        assert!(matches!(
            Epoch::from_jd_utc(f64::NAN),
            Err(TimeError::NonFinite(_))
        ));
    }

    #[test]
    fn tt_offset_2024() {
        let at = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        let epoch = Epoch::from_utc(at).unwrap();
        let offset_s = (epoch.jd_tt() - epoch.jd_utc()) * SECONDS_PER_DAY;
        assert!((offset_s - 69.184).abs() < 1e-3, "TT - UTC = {offset_s}");
    }

    #[test]
    fn from_utc_matches_calendar() {
        let at = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let epoch = Epoch::from_utc(at).unwrap();
        assert!((epoch.jd_utc() - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn subsecond_precision_kept() {
        let a = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let b = a + chrono::Duration::milliseconds(500);
        let ea = Epoch::from_utc(a).unwrap();
        let eb = Epoch::from_utc(b).unwrap();
        let dt = (eb.jd_utc() - ea.jd_utc()) * SECONDS_PER_DAY;
        assert!((dt - 0.5).abs() < 1e-3, "dt = {dt}");
    }
}
