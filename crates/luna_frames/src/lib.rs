//! Frame conversion helpers for the lunar clock.
//!
//! Provides mean obliquity, ecliptic ↔ equatorial rotation of date,
//! Cartesian ↔ spherical conversion, and the observer's geocentric
//! position from geodetic coordinates.

pub mod geodetic;
pub mod obliquity;
pub mod rotation;
pub mod spherical;

pub use geodetic::{EARTH_EQUATORIAL_RADIUS_KM, GeoLocation};
pub use obliquity::{mean_obliquity_deg, mean_obliquity_rad};
pub use rotation::{ecliptic_to_equatorial, equatorial_to_ecliptic};
pub use spherical::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian};

/// Dot product of two 3-vectors.
pub fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Euclidean norm of a 3-vector.
pub fn norm(v: &[f64; 3]) -> f64 {
    dot(v, v).sqrt()
}

/// Component-wise `a - b`.
pub fn sub(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_helpers() {
        let a = [3.0, 4.0, 12.0];
        assert_eq!(norm(&a), 13.0);
        assert_eq!(sub(&a, &a), [0.0; 3]);
        assert_eq!(dot(&a, &[1.0, 0.0, 0.0]), 3.0);
    }
}
