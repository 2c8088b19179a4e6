//! Geocentric Sun, low-precision theory.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 25. Accuracy is
//! about 0.01 deg in longitude, well inside one 12-degree lunar day.

use luna_frames::SphericalCoords;

/// Astronomical unit in km (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;

/// Constant of aberration applied to the Sun's longitude, degrees.
const ABERRATION_DEG: f64 = -0.005_69;

/// Geometric (true) longitude of the Sun referred to the mean equinox of
/// date, degrees in [0, 360), and radius vector in AU.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn true_longitude_and_radius(t: f64) -> (f64, f64) {
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t;
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;

    let m_rad = m.to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m_rad.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin();

    let true_lon = (l0 + c).rem_euclid(360.0);
    let nu = (m + c).to_radians();
    let radius_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos());
    (true_lon, radius_au)
}

/// Ecliptic position of the Sun, corrected for aberration.
///
/// Latitude is taken as zero (it never exceeds 1.2 arcseconds).
pub fn sun_position(t: f64) -> SphericalCoords {
    let (lon, r) = true_longitude_and_radius(t);
    SphericalCoords::new((lon + ABERRATION_DEG).rem_euclid(360.0), 0.0, r * AU_KM)
}
