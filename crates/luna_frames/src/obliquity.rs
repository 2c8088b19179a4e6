//! Mean obliquity of the ecliptic.
//!
//! Source: IAU 2006 precession (Capitaine, Wallace & Chapront 2003),
//! IERS Conventions 2010, Eq. 5.40.

/// Mean obliquity of date in arcseconds.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_obliquity_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    84381.406 - 46.836769 * t - 0.0001831 * t2 + 0.00200340 * t3 - 0.000000576 * t4
        - 0.0000000434 * t5
}

/// Mean obliquity of date in degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_arcsec(t) / 3600.0
}

/// Mean obliquity of date in radians.
pub fn mean_obliquity_rad(t: f64) -> f64 {
    mean_obliquity_deg(t).to_radians()
}
