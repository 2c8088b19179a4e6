//! ΔT = TT − UT before the leap-second era.
//!
//! Espenak & Meeus polynomial fits (NASA Five Millennium Canon of Solar
//! Eclipses), used for instants before 1972-Jan-01. UTC is taken as UT.

use crate::julian::J2000_JD;

/// Decimal year of a Julian Date.
fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}

/// Evaluate `c[0] + c[1] x + c[2] x² + ...`.
fn poly(x: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// ΔT in seconds at a UT Julian Date.
#[rustfmt::skip]
pub fn delta_t_s(jd_ut: f64) -> f64 {
    let y = decimal_year(jd_ut);
    if y < -500.0 {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    } else if y < 500.0 {
        poly(y / 100.0, &[10_583.6, -1_014.41, 33.783_11, -5.952_053, -0.179_845_2, 0.022_174_192, 0.009_031_652_1])
    } else if y < 1600.0 {
        poly((y - 1000.0) / 100.0, &[1_574.2, -556.01, 71.234_72, 0.319_781, -0.850_346_3, -0.005_050_998, 0.008_357_207_3])
    } else if y < 1700.0 {
        poly(y - 1600.0, &[120.0, -0.980_8, -0.015_32, 1.0 / 7_129.0])
    } else if y < 1800.0 {
        poly(y - 1700.0, &[8.83, 0.160_3, -0.005_928_5, 0.000_133_36, -1.0 / 1_174_000.0])
    } else if y < 1860.0 {
        poly(y - 1800.0, &[13.72, -0.332_447, 0.006_861_2, 0.004_111_6, -0.000_374_36, 0.000_012_127_2, -0.000_000_169_9, 0.000_000_000_875])
    } else if y < 1900.0 {
        poly(y - 1860.0, &[7.62, 0.573_7, -0.251_754, 0.016_806_68, -0.000_447_362_4, 1.0 / 233_174.0])
    } else if y < 1920.0 {
        poly(y - 1900.0, &[-2.79, 1.494_119, -0.059_893_9, 0.006_196_6, -0.000_197])
    } else if y < 1941.0 {
        poly(y - 1920.0, &[21.20, 0.844_93, -0.076_100, 0.002_093_6])
    } else if y < 1961.0 {
        poly(y - 1950.0, &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2_547.0])
    } else {
        poly(y - 1975.0, &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0])
    }
}
