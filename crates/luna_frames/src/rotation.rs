//! Rotation between ecliptic and equatorial frames of date.
//!
//! Both frames share the x-axis (the equinox); they differ by a rotation
//! about x through the obliquity ε.

/// Rotate an ecliptic vector into the equatorial frame.
pub fn ecliptic_to_equatorial(v: &[f64; 3], obliquity_rad: f64) -> [f64; 3] {
    let (s, c) = obliquity_rad.sin_cos();
    [v[0], c * v[1] - s * v[2], s * v[1] + c * v[2]]
}

/// Rotate an equatorial vector into the ecliptic frame.
pub fn equatorial_to_ecliptic(v: &[f64; 3], obliquity_rad: f64) -> [f64; 3] {
    let (s, c) = obliquity_rad.sin_cos();
    [v[0], c * v[1] + s * v[2], -s * v[1] + c * v[2]]
}
