//! Analytic ephemeris for the lunar clock.
//!
//! Answers one question: where are the Sun and the Moon relative to each
//! other for a given observer and instant. The answer is a
//! [`MoonObservation`] carrying the Moon–Sun elongation and the
//! illuminated fraction of the lunar disk.
//!
//! The [`Ephemeris`] trait is the seam the clock depends on;
//! [`AnalyticEphemeris`] implements it with the Meeus low-precision Sun
//! and the Chapter 47 Moon, corrected to the observer's position.

pub mod error;
pub mod moon;
pub mod sun;
pub mod topocentric;

use std::f64::consts::TAU;

use luna_frames::{
    GeoLocation, SphericalCoords, dot, mean_obliquity_rad, norm, spherical_to_cartesian, sub,
};
use luna_time::Epoch;

pub use error::EphemerisError;
pub use moon::moon_position;
pub use sun::{AU_KM, sun_position};
pub use topocentric::topocentric_position;

/// Sun and Moon as seen by one observer at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonObservation {
    /// Moon longitude minus Sun longitude along the ecliptic, radians in [0, 2π).
    pub elongation_rad: f64,
    /// Sun–Moon–observer angle, radians in [0, π].
    pub phase_angle_rad: f64,
    /// Illuminated fraction of the lunar disk, [0, 1].
    pub illuminated_fraction: f64,
    /// Moon position (ecliptic of date).
    pub moon: SphericalCoords,
    /// Sun position (ecliptic of date).
    pub sun: SphericalCoords,
}

impl MoonObservation {
    /// Assemble an observation from Moon and Sun positions referred to the
    /// same origin and frame.
    pub fn from_positions(
        moon: SphericalCoords,
        sun: SphericalCoords,
    ) -> Result<Self, EphemerisError> {
        let elongation_rad = (moon.lon_deg - sun.lon_deg).to_radians().rem_euclid(TAU);

        let m = spherical_to_cartesian(&moon);
        let s = spherical_to_cartesian(&sun);
        let moon_to_sun = sub(&s, &m);
        let moon_to_observer = [-m[0], -m[1], -m[2]];
        let cos_i = dot(&moon_to_sun, &moon_to_observer) / (norm(&moon_to_sun) * norm(&m));
        let phase_angle_rad = cos_i.clamp(-1.0, 1.0).acos();
        let illuminated_fraction = (1.0 + phase_angle_rad.cos()) / 2.0;

        if !elongation_rad.is_finite() {
            return Err(EphemerisError::NonFinite("elongation"));
        }
        if !illuminated_fraction.is_finite() {
            return Err(EphemerisError::NonFinite("illuminated fraction"));
        }
        Ok(Self {
            elongation_rad,
            phase_angle_rad,
            illuminated_fraction,
            moon,
            sun,
        })
    }

    /// Elongation in degrees [0, 360).
    pub fn elongation_deg(&self) -> f64 {
        self.elongation_rad.to_degrees()
    }

    /// Illuminated fraction as a percentage [0, 100].
    pub fn illuminated_percent(&self) -> f64 {
        self.illuminated_fraction * 100.0
    }
}

/// Source of Sun/Moon geometry for an observer.
///
/// Implementations are [`Send`] + [`Sync`] so a single instance can be
/// shared by concurrent request handlers.
pub trait Ephemeris: Send + Sync {
    fn observe(
        &self,
        location: &GeoLocation,
        epoch: Epoch,
    ) -> Result<MoonObservation, EphemerisError>;
}

/// Closed-form Sun and Moon theories. Stateless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }

    /// Geometry as seen from the Earth's center, ignoring the observer.
    pub fn observe_geocentric(&self, epoch: Epoch) -> Result<MoonObservation, EphemerisError> {
        let t = epoch.centuries_tt();
        MoonObservation::from_positions(moon_position(t), sun_position(t))
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn observe(
        &self,
        location: &GeoLocation,
        epoch: Epoch,
    ) -> Result<MoonObservation, EphemerisError> {
        location.check().map_err(EphemerisError::InvalidLocation)?;
        let t = epoch.centuries_tt();
        let obliquity = mean_obliquity_rad(t);
        let moon = topocentric_position(&moon_position(t), location, epoch.jd_utc(), obliquity);
        // Solar parallax (8.8") is below the theory's accuracy.
        MoonObservation::from_positions(moon, sun_position(t))
    }
}
