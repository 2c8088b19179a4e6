//! Geocentric → topocentric correction.
//!
//! The observer's geocentric vector is subtracted from the body's vector
//! in the equatorial frame of date, then the result is rotated back to the
//! ecliptic. For the Moon this shifts the position by up to about one
//! degree (horizontal parallax).

use luna_frames::{
    GeoLocation, SphericalCoords, cartesian_to_spherical, ecliptic_to_equatorial,
    equatorial_to_ecliptic, spherical_to_cartesian, sub,
};
use luna_time::local_sidereal_time_rad;

/// Position of a body as seen from `location` at UT Julian Date `jd_ut`.
///
/// `geocentric` is the ecliptic position referred to the mean equinox of
/// date and `obliquity_rad` the mean obliquity of the same date.
pub fn topocentric_position(
    geocentric: &SphericalCoords,
    location: &GeoLocation,
    jd_ut: f64,
    obliquity_rad: f64,
) -> SphericalCoords {
    let equatorial = ecliptic_to_equatorial(&spherical_to_cartesian(geocentric), obliquity_rad);
    let lst = local_sidereal_time_rad(jd_ut, location.longitude_rad());
    let observer = location.geocentric_position_km(lst);
    let shifted = sub(&equatorial, &observer);
    cartesian_to_spherical(&equatorial_to_ecliptic(&shifted, obliquity_rad))
}

#[cfg(test)]
mod tests {
    use super::*;
    use luna_frames::{EARTH_EQUATORIAL_RADIUS_KM, cartesian_to_spherical};

    const EPS: f64 = 0.409_092_804_222_329;
    const JD: f64 = 2_460_000.5;

    #[test]
    fn shift_bounded_by_horizontal_parallax() {
        let site = GeoLocation::new(45.0, 34.0, 0.0);
        for i in 0..36 {
            let geo = SphericalCoords::new(i as f64 * 10.0, 2.0, 384_400.0);
            let topo = topocentric_position(&geo, &site, JD, EPS);
            let mut dlon = (topo.lon_deg - geo.lon_deg).abs();
            if dlon > 180.0 {
                dlon = 360.0 - dlon;
            }
            // sin(pi) = 6378 / 384400 -> pi = 0.95 deg
            assert!(dlon < 1.4, "dlon = {dlon}");
            assert!((topo.lat_deg - geo.lat_deg).abs() < 1.0);
        }
    }

    #[test]
    fn body_at_zenith_is_one_radius_closer() {
        let site = GeoLocation::new(0.0, 0.0, 0.0);
        let lst = local_sidereal_time_rad(JD, 0.0);
        // Equatorial vector straight above the observer, expressed in the ecliptic.
        let overhead = [384_400.0 * lst.cos(), 384_400.0 * lst.sin(), 0.0];
        let geo = cartesian_to_spherical(&equatorial_to_ecliptic(&overhead, EPS));
        let topo = topocentric_position(&geo, &site, JD, EPS);
        let expected = 384_400.0 - EARTH_EQUATORIAL_RADIUS_KM;
        assert!((topo.distance_km - expected).abs() < 1e-6);
        assert!((topo.lon_deg - geo.lon_deg).abs() < 1e-9);
    }
}
