//! Mean sidereal time.
//!
//! The clock treats UTC as UT1; the difference stays under 0.9 s, about
//! 13 arcseconds of Earth rotation, which is far below the lunar-day
//! resolution.

use std::f64::consts::TAU;

use crate::julian::{J2000_JD, jd_to_centuries};

/// Greenwich Mean Sidereal Time at a UT Julian Date, radians in [0, 2π).
///
/// Meeus, *Astronomical Algorithms* (2nd ed.), Eq. 12.4.
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let deg = 280.460_618_37 + 360.985_647_366_29 * (jd_ut - J2000_JD) + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    deg.to_radians().rem_euclid(TAU)
}

/// Local mean sidereal time: GMST plus east longitude, radians in [0, 2π).
pub fn local_sidereal_time_rad(jd_ut: f64, longitude_east_rad: f64) -> f64 {
    (gmst_rad(jd_ut) + longitude_east_rad).rem_euclid(TAU)
}
