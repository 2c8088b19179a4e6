//! UTC → TT offset.

use crate::delta_t::delta_t_s;
use crate::leap::tai_minus_utc;

/// TT − TAI in seconds (exact by definition).
pub const TT_MINUS_TAI_S: f64 = 32.184;

/// TT − UTC in seconds at a UTC Julian Date.
///
/// From the leap-second table since 1972, from ΔT before that.
pub fn tt_minus_utc_s(jd_utc: f64) -> f64 {
    match tai_minus_utc(jd_utc) {
        Some(tai_utc) => tai_utc + TT_MINUS_TAI_S,
        None => delta_t_s(jd_utc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::calendar_to_jd;

    #[test]
    fn leap_second_era() {
        assert!((tt_minus_utc_s(calendar_to_jd(2024, 3, 20.5)) - 69.184).abs() < 1e-9);
        assert!((tt_minus_utc_s(calendar_to_jd(1972, 1, 1.0)) - 42.184).abs() < 1e-9);
    }

    #[test]
    fn no_jump_at_1972() {
        let before = tt_minus_utc_s(calendar_to_jd(1971, 12, 31.99));
        let after = tt_minus_utc_s(calendar_to_jd(1972, 1, 1.0));
        assert!((after - before).abs() < 0.5, "{before} -> {after}");
    }
}
