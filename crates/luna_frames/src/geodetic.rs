//! Geographic observer location and its geocentric position.
//!
//! Uses the WGS 84 ellipsoid.

/// WGS 84 equatorial radius in km.
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.137;

/// WGS 84 flattening.
const EARTH_FLATTENING: f64 = 1.0 / 298.257_223_563;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above the ellipsoid in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Reject non-finite or out-of-range coordinates, naming the bad field.
    pub fn check(&self) -> Result<(), &'static str> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err("latitude must be finite and within [-90, 90]");
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err("longitude must be finite and within [-180, 180]");
        }
        if !self.altitude_m.is_finite() {
            return Err("altitude must be finite");
        }
        Ok(())
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    /// Geocentric position in the equatorial frame of date, km.
    ///
    /// `local_sidereal_rad` is the observer's local sidereal time, which
    /// is the right ascension of the observer's meridian.
    pub fn geocentric_position_km(&self, local_sidereal_rad: f64) -> [f64; 3] {
        let (sin_phi, cos_phi) = self.latitude_rad().sin_cos();
        let one_minus_f_sq = (1.0 - EARTH_FLATTENING) * (1.0 - EARTH_FLATTENING);
        let c = 1.0 / (cos_phi * cos_phi + one_minus_f_sq * sin_phi * sin_phi).sqrt();
        let s = one_minus_f_sq * c;
        let h_km = self.altitude_m / 1000.0;

        let rho_cos = (EARTH_EQUATORIAL_RADIUS_KM * c + h_km) * cos_phi;
        let rho_sin = (EARTH_EQUATORIAL_RADIUS_KM * s + h_km) * sin_phi;
        let (sin_t, cos_t) = local_sidereal_rad.sin_cos();
        [rho_cos * cos_t, rho_cos * sin_t, rho_sin]
    }
}
