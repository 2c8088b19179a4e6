//! Cartesian ↔ spherical coordinate conversion.

use std::f64::consts::TAU;

/// Spherical coordinates: longitude, latitude, distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, range [0, 360), measured from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
    /// Distance from origin in km.
    pub distance_km: f64,
}

impl SphericalCoords {
    pub fn new(lon_deg: f64, lat_deg: f64, distance_km: f64) -> Self {
        Self {
            lon_deg,
            lat_deg,
            distance_km,
        }
    }
}

/// Convert Cartesian `[x, y, z]` (km) to spherical coordinates.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return SphericalCoords::new(0.0, 0.0, 0.0);
    }
    SphericalCoords {
        lon_deg: y.atan2(x).rem_euclid(TAU).to_degrees(),
        lat_deg: (z / r).asin().to_degrees(),
        distance_km: r,
    }
}

/// Convert spherical coordinates to Cartesian `[x, y, z]` (km).
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let (sin_lon, cos_lon) = s.lon_deg.to_radians().sin_cos();
    let (sin_lat, cos_lat) = s.lat_deg.to_radians().sin_cos();
    [
        s.distance_km * cos_lat * cos_lon,
        s.distance_km * cos_lat * sin_lon,
        s.distance_km * sin_lat,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_zero() {
        assert_eq!(
            cartesian_to_spherical(&[0.0, 0.0, 0.0]),
            SphericalCoords::new(0.0, 0.0, 0.0)
        );
    }

    #[test]
    fn negative_y_wraps_longitude() {
        let s = cartesian_to_spherical(&[0.0, -1.0, 0.0]);
        assert!((s.lon_deg - 270.0).abs() < 1e-12);
    }

    #[test]
    fn roundtrip() {
        let s = SphericalCoords::new(133.16, -3.23, 368_409.7);
        let back = cartesian_to_spherical(&spherical_to_cartesian(&s));
        assert!((back.lon_deg - s.lon_deg).abs() < 1e-9);
        assert!((back.lat_deg - s.lat_deg).abs() < 1e-9);
        assert!((back.distance_km - s.distance_km).abs() < 1e-6);
    }
}
