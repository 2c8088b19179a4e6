//! Lunar clock: the lunar day and moon phase for an observer and instant.
//!
//! Both quantities come from one ephemeris query:
//! - the lunar day is the 12-degree segment of Moon–Sun elongation the
//!   instant falls in, numbered 1..=30
//! - the phase is a five-way classification of the illuminated percentage
//!
//! Every function here is pure. The instant is always supplied by the
//! caller, so identical inputs give identical outputs.
//!
//! ```rust,ignore
//! let clock = LunarClock::new(GeoLocation::new(45.0, 34.0, 0.0));
//! let reading = clock.reading(Utc::now())?;
//! println!("day {}: {} ({:.1}%)", reading.day, reading.phase.phase, reading.phase.percent);
//! ```

pub mod day;
pub mod error;
pub mod phase;

use chrono::{DateTime, Utc};
use luna_ephem::{AnalyticEphemeris, Ephemeris, MoonObservation};
use luna_time::Epoch;

pub use day::{DAYS_IN_CYCLE, LUNAR_DAY_SEGMENT_DEG, LunarDay, lunar_day_from_elongation};
pub use error::ClockError;
pub use luna_frames::GeoLocation;
pub use phase::{ALL_PHASES, FULL_MOON_THRESHOLD_PCT, MoonPhase, PhaseReading};

/// Lunar day and phase from a single observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarReading {
    pub day: LunarDay,
    pub phase: PhaseReading,
    /// Elongation the day was derived from, degrees.
    pub elongation_deg: f64,
}

/// Query the ephemeris and validate what it returns.
fn observe<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    location: &GeoLocation,
    at: DateTime<Utc>,
) -> Result<MoonObservation, ClockError> {
    let epoch = Epoch::from_utc(at)?;
    let obs = ephemeris.observe(location, epoch)?;
    if !obs.elongation_rad.is_finite() {
        return Err(ClockError::InvalidReading("elongation is not finite"));
    }
    if !obs.illuminated_fraction.is_finite() {
        return Err(ClockError::InvalidReading("illuminated fraction is not finite"));
    }
    Ok(obs)
}

fn reading_from(obs: &MoonObservation) -> LunarReading {
    let elongation_deg = obs.elongation_rad.to_degrees();
    LunarReading {
        day: lunar_day_from_elongation(elongation_deg),
        phase: PhaseReading::from_percent(obs.illuminated_fraction * 100.0),
        elongation_deg,
    }
}

/// Lunar day for `location` at `at`.
pub fn compute_lunar_day<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    location: &GeoLocation,
    at: DateTime<Utc>,
) -> Result<LunarDay, ClockError> {
    observe(ephemeris, location, at).map(|obs| reading_from(&obs).day)
}

/// Moon phase and illuminated percentage for `location` at `at`.
pub fn compute_moon_phase<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    location: &GeoLocation,
    at: DateTime<Utc>,
) -> Result<PhaseReading, ClockError> {
    observe(ephemeris, location, at).map(|obs| reading_from(&obs).phase)
}

/// An ephemeris bound to a fixed observer location.
///
/// Holds no mutable state; share it behind an `Arc` across handlers.
#[derive(Debug, Clone)]
pub struct LunarClock<E = AnalyticEphemeris> {
    ephemeris: E,
    location: GeoLocation,
}

impl LunarClock<AnalyticEphemeris> {
    /// Clock backed by the analytic ephemeris.
    pub fn new(location: GeoLocation) -> Self {
        Self::with_ephemeris(AnalyticEphemeris::new(), location)
    }
}

impl<E: Ephemeris> LunarClock<E> {
    pub fn with_ephemeris(ephemeris: E, location: GeoLocation) -> Self {
        Self {
            ephemeris,
            location,
        }
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    /// Lunar day at `at`.
    pub fn lunar_day(&self, at: DateTime<Utc>) -> Result<LunarDay, ClockError> {
        compute_lunar_day(&self.ephemeris, &self.location, at)
    }

    /// Moon phase at `at`.
    pub fn moon_phase(&self, at: DateTime<Utc>) -> Result<PhaseReading, ClockError> {
        compute_moon_phase(&self.ephemeris, &self.location, at)
    }

    /// Day and phase from one ephemeris query.
    pub fn reading(&self, at: DateTime<Utc>) -> Result<LunarReading, ClockError> {
        observe(&self.ephemeris, &self.location, at).map(|obs| reading_from(&obs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use luna_ephem::EphemerisError;
    use luna_frames::SphericalCoords;

    /// Returns a fixed elongation and illuminated fraction.
    struct Fixed {
        elongation_deg: f64,
        fraction: f64,
    }

    impl Ephemeris for Fixed {
        fn observe(
            &self,
            _location: &GeoLocation,
            _epoch: Epoch,
        ) -> Result<MoonObservation, EphemerisError> {
            Ok(MoonObservation {
                elongation_rad: self.elongation_deg.to_radians(),
                phase_angle_rad: 0.0,
                illuminated_fraction: self.fraction,
                moon: SphericalCoords::new(0.0, 0.0, 0.0),
                sun: SphericalCoords::new(0.0, 0.0, 0.0),
            })
        }
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap()
    }

    fn site() -> GeoLocation {
        GeoLocation::new(45.0, 34.0, 0.0)
    }

    #[test]
    fn fixed_reading() {
        let clock = LunarClock::with_ephemeris(
            Fixed {
                elongation_deg: 100.0,
                fraction: 0.6,
            },
            site(),
        );
        let r = clock.reading(at()).unwrap();
        assert_eq!(r.day.get(), 9);
        assert_eq!(r.phase.phase, MoonPhase::Waning);
        assert!((r.phase.percent - 60.0).abs() < 1e-9);
    }

    #[test]
    fn full_circle_clamps_to_thirty() {
        let clock = LunarClock::with_ephemeris(
            Fixed {
                elongation_deg: 360.0,
                fraction: 0.0,
            },
            site(),
        );
        assert_eq!(clock.lunar_day(at()).unwrap(), LunarDay::LAST);
        assert_eq!(clock.moon_phase(at()).unwrap().phase, MoonPhase::NewMoon);
    }

    #[test]
    fn nan_elongation_is_error() {
        let clock = LunarClock::with_ephemeris(
            Fixed {
                elongation_deg: f64::NAN,
                fraction: 0.5,
            },
            site(),
        );
        assert!(matches!(
            clock.lunar_day(at()),
            Err(ClockError::InvalidReading(_))
        ));
    }

    #[test]
    fn pre_1972_instant_reads() {
        let clock = LunarClock::new(site());
        let old = Utc.with_ymd_and_hms(1969, 7, 20, 20, 17, 0).unwrap();
        let r = clock.reading(old).unwrap();
        assert!((1..=30).contains(&r.day.get()));
    }

    #[test]
    fn malformed_location_is_ephemeris_error() {
        let clock = LunarClock::new(GeoLocation::new(45.0, f64::INFINITY, 0.0));
        assert!(matches!(
            clock.moon_phase(at()),
            Err(ClockError::Ephemeris(EphemerisError::InvalidLocation(_)))
        ));
    }

    #[test]
    fn free_functions_match_clock() {
        let clock = LunarClock::new(site());
        let eph = AnalyticEphemeris::new();
        assert_eq!(
            compute_lunar_day(&eph, &site(), at()).unwrap(),
            clock.lunar_day(at()).unwrap()
        );
        assert_eq!(
            compute_moon_phase(&eph, &site(), at()).unwrap(),
            clock.moon_phase(at()).unwrap()
        );
    }

    #[test]
    fn dyn_ephemeris_accepted() {
        let eph: Box<dyn Ephemeris> = Box::new(AnalyticEphemeris::new());
        assert!(compute_lunar_day(eph.as_ref(), &site(), at()).is_ok());
    }
}
