//! Geocentric Moon.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 47: the complete
//! Table 47.A for longitude and distance, the leading 30 rows of Table
//! 47.B for latitude, plus the additive Venus/Jupiter/flattening terms.
//! Longitude accuracy is about 10 arcseconds.

use luna_frames::SphericalCoords;

/// Table 47.A: `[D, M, M', F, Σl (1e-6 deg), Σr (1e-3 km)]`.
#[rustfmt::skip]
static LONGITUDE_DISTANCE_TERMS: [[f64; 6]; 60] = [
    //  D     M     M'    F         Σl          Σr
    [ 0.0,  0.0,  1.0,  0.0,  6_288_774.0, -20_905_355.0],
    [ 2.0,  0.0, -1.0,  0.0,  1_274_027.0,  -3_699_111.0],
    [ 2.0,  0.0,  0.0,  0.0,    658_314.0,  -2_955_968.0],
    [ 0.0,  0.0,  2.0,  0.0,    213_618.0,    -569_925.0],
    [ 0.0,  1.0,  0.0,  0.0,   -185_116.0,      48_888.0],
    [ 0.0,  0.0,  0.0,  2.0,   -114_332.0,      -3_149.0],
    [ 2.0,  0.0, -2.0,  0.0,     58_793.0,     246_158.0],
    [ 2.0, -1.0, -1.0,  0.0,     57_066.0,    -152_138.0],
    [ 2.0,  0.0,  1.0,  0.0,     53_322.0,    -170_733.0],
    [ 2.0, -1.0,  0.0,  0.0,     45_758.0,    -204_586.0],
    [ 0.0,  1.0, -1.0,  0.0,    -40_923.0,    -129_620.0],
    [ 1.0,  0.0,  0.0,  0.0,    -34_720.0,     108_743.0],
    [ 0.0,  1.0,  1.0,  0.0,    -30_383.0,     104_755.0],
    [ 2.0,  0.0,  0.0, -2.0,     15_327.0,      10_321.0],
    [ 0.0,  0.0,  1.0,  2.0,    -12_528.0,           0.0],
    [ 0.0,  0.0,  1.0, -2.0,     10_980.0,      79_661.0],
    [ 4.0,  0.0, -1.0,  0.0,     10_675.0,     -34_782.0],
    [ 0.0,  0.0,  3.0,  0.0,     10_034.0,     -23_210.0],
    [ 4.0,  0.0, -2.0,  0.0,      8_548.0,     -21_636.0],
    [ 2.0,  1.0, -1.0,  0.0,     -7_888.0,      24_208.0],
    [ 2.0,  1.0,  0.0,  0.0,     -6_766.0,      30_824.0],
    [ 1.0,  0.0, -1.0,  0.0,     -5_163.0,      -8_379.0],
    [ 1.0,  1.0,  0.0,  0.0,      4_987.0,     -16_675.0],
    [ 2.0, -1.0,  1.0,  0.0,      4_036.0,     -12_831.0],
    [ 2.0,  0.0,  2.0,  0.0,      3_994.0,     -10_445.0],
    [ 4.0,  0.0,  0.0,  0.0,      3_861.0,     -11_650.0],
    [ 2.0,  0.0, -3.0,  0.0,      3_665.0,      14_403.0],
    [ 0.0,  1.0, -2.0,  0.0,     -2_689.0,      -7_003.0],
    [ 2.0,  0.0, -1.0,  2.0,     -2_602.0,           0.0],
    [ 2.0, -1.0, -2.0,  0.0,      2_390.0,      10_056.0],
    [ 1.0,  0.0,  1.0,  0.0,     -2_348.0,       6_322.0],
    [ 2.0, -2.0,  0.0,  0.0,      2_236.0,      -9_884.0],
    [ 0.0,  1.0,  2.0,  0.0,     -2_120.0,       5_751.0],
    [ 0.0,  2.0,  0.0,  0.0,     -2_069.0,           0.0],
    [ 2.0, -2.0, -1.0,  0.0,      2_048.0,      -4_950.0],
    [ 2.0,  0.0,  1.0, -2.0,     -1_773.0,       4_130.0],
    [ 2.0,  0.0,  0.0,  2.0,     -1_595.0,           0.0],
    [ 4.0, -1.0, -1.0,  0.0,      1_215.0,      -3_958.0],
    [ 0.0,  0.0,  2.0,  2.0,     -1_110.0,           0.0],
    [ 3.0,  0.0, -1.0,  0.0,       -892.0,       3_258.0],
    [ 2.0,  1.0,  1.0,  0.0,       -810.0,       2_616.0],
    [ 4.0, -1.0, -2.0,  0.0,        759.0,      -1_897.0],
    [ 0.0,  2.0, -1.0,  0.0,       -713.0,      -2_117.0],
    [ 2.0,  2.0, -1.0,  0.0,       -700.0,       2_354.0],
    [ 2.0,  1.0, -2.0,  0.0,        691.0,           0.0],
    [ 2.0, -1.0,  0.0, -2.0,        596.0,           0.0],
    [ 4.0,  0.0,  1.0,  0.0,        549.0,      -1_423.0],
    [ 0.0,  0.0,  4.0,  0.0,        537.0,      -1_117.0],
    [ 4.0, -1.0,  0.0,  0.0,        520.0,      -1_571.0],
    [ 1.0,  0.0, -2.0,  0.0,       -487.0,      -1_739.0],
    [ 2.0,  1.0,  0.0, -2.0,       -399.0,           0.0],
    [ 0.0,  0.0,  2.0, -2.0,       -381.0,      -4_421.0],
    [ 1.0,  1.0,  1.0,  0.0,        351.0,           0.0],
    [ 3.0,  0.0, -2.0,  0.0,       -340.0,           0.0],
    [ 4.0,  0.0, -3.0,  0.0,        330.0,           0.0],
    [ 2.0, -1.0,  2.0,  0.0,        327.0,           0.0],
    [ 0.0,  2.0,  1.0,  0.0,       -323.0,       1_165.0],
    [ 1.0,  1.0, -1.0,  0.0,        299.0,           0.0],
    [ 2.0,  0.0,  3.0,  0.0,        294.0,           0.0],
    [ 2.0,  0.0, -1.0, -2.0,          0.0,       8_752.0],
];

/// Table 47.B (leading rows): `[D, M, M', F, Σb (1e-6 deg)]`.
#[rustfmt::skip]
static LATITUDE_TERMS: [[f64; 5]; 30] = [
    //  D     M     M'    F         Σb
    [ 0.0,  0.0,  0.0,  1.0,  5_128_122.0],
    [ 0.0,  0.0,  1.0,  1.0,    280_602.0],
    [ 0.0,  0.0,  1.0, -1.0,    277_693.0],
    [ 2.0,  0.0,  0.0, -1.0,    173_237.0],
    [ 2.0,  0.0, -1.0,  1.0,     55_413.0],
    [ 2.0,  0.0, -1.0, -1.0,     46_271.0],
    [ 2.0,  0.0,  0.0,  1.0,     32_573.0],
    [ 0.0,  0.0,  2.0,  1.0,     17_198.0],
    [ 2.0,  0.0,  1.0, -1.0,      9_266.0],
    [ 0.0,  0.0,  2.0, -1.0,      8_822.0],
    [ 2.0, -1.0,  0.0, -1.0,      8_216.0],
    [ 2.0,  0.0, -2.0, -1.0,      4_324.0],
    [ 2.0,  0.0,  1.0,  1.0,      4_200.0],
    [ 2.0,  1.0,  0.0, -1.0,     -3_359.0],
    [ 2.0, -1.0, -1.0,  1.0,      2_463.0],
    [ 2.0, -1.0,  0.0,  1.0,      2_211.0],
    [ 2.0, -1.0, -1.0, -1.0,      2_065.0],
    [ 0.0,  1.0, -1.0, -1.0,     -1_870.0],
    [ 4.0,  0.0, -1.0, -1.0,      1_828.0],
    [ 0.0,  1.0,  0.0,  1.0,     -1_794.0],
    [ 0.0,  0.0,  0.0,  3.0,     -1_749.0],
    [ 0.0,  1.0, -1.0,  1.0,     -1_565.0],
    [ 1.0,  0.0,  0.0,  1.0,     -1_491.0],
    [ 0.0,  1.0,  1.0,  1.0,     -1_475.0],
    [ 0.0,  1.0,  1.0, -1.0,     -1_410.0],
    [ 0.0,  1.0,  0.0, -1.0,     -1_344.0],
    [ 1.0,  0.0,  0.0, -1.0,     -1_335.0],
    [ 0.0,  0.0,  3.0,  1.0,      1_107.0],
    [ 4.0,  0.0,  0.0, -1.0,      1_021.0],
    [ 4.0,  0.0, -1.0,  1.0,        833.0],
];

/// Mean distance term of the Earth–Moon distance, km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Fundamental arguments of the lunar theory, all in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    /// Moon's mean longitude L'.
    pub mean_longitude: f64,
    /// Mean elongation D.
    pub elongation: f64,
    /// Sun's mean anomaly M.
    pub sun_anomaly: f64,
    /// Moon's mean anomaly M'.
    pub moon_anomaly: f64,
    /// Argument of latitude F.
    pub latitude_arg: f64,
    /// Eccentricity factor E (dimensionless).
    pub eccentricity: f64,
}

impl LunarArguments {
    /// Evaluate at `t` Julian centuries of TT since J2000.0.
    pub fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            mean_longitude: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2
                + t3 / 538_841.0
                - t4 / 65_194_000.0,
            elongation: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
                - t4 / 113_065_000.0,
            sun_anomaly: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2
                + t3 / 24_490_000.0,
            moon_anomaly: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2
                + t3 / 69_699.0
                - t4 / 14_712_000.0,
            latitude_arg: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2
                - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
            eccentricity: 1.0 - 0.002_516 * t - 0.000_007_4 * t2,
        }
    }

    /// Argument of a periodic term, radians, and the E factor its `M`
    /// multiplier calls for.
    fn term(&self, d: f64, m: f64, mp: f64, f: f64) -> (f64, f64) {
        let angle = d * self.elongation
            + m * self.sun_anomaly
            + mp * self.moon_anomaly
            + f * self.latitude_arg;
        let e_factor = match m.abs() as u8 {
            0 => 1.0,
            1 => self.eccentricity,
            _ => self.eccentricity * self.eccentricity,
        };
        (angle.to_radians(), e_factor)
    }
}

/// Geocentric ecliptic position of the Moon referred to the mean equinox
/// of date (no nutation).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn moon_position(t: f64) -> SphericalCoords {
    let args = LunarArguments::at(t);

    let mut sum_l = 0.0_f64;
    let mut sum_r = 0.0_f64;
    for row in &LONGITUDE_DISTANCE_TERMS {
        let (angle, e) = args.term(row[0], row[1], row[2], row[3]);
        sum_l += row[4] * e * angle.sin();
        sum_r += row[5] * e * angle.cos();
    }

    let mut sum_b = 0.0_f64;
    for row in &LATITUDE_TERMS {
        let (angle, e) = args.term(row[0], row[1], row[2], row[3]);
        sum_b += row[4] * e * angle.sin();
    }

    // Venus (A1), Jupiter (A2) and Earth-flattening corrections.
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let a3 = (313.45 + 481_266.484 * t).to_radians();
    let lp = args.mean_longitude.to_radians();
    let f = args.latitude_arg.to_radians();
    let mp = args.moon_anomaly.to_radians();

    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (lp - mp).sin()
        - 115.0 * (lp + mp).sin();

    SphericalCoords {
        lon_deg: (args.mean_longitude + sum_l / 1_000_000.0).rem_euclid(360.0),
        lat_deg: sum_b / 1_000_000.0,
        distance_km: MEAN_DISTANCE_KM + sum_r / 1000.0,
    }
}
