//! Lunar day: one of 30 twelve-degree segments of Moon–Sun elongation.

use std::fmt;

/// Number of lunar days in one elongation cycle.
pub const DAYS_IN_CYCLE: u8 = 30;

/// Elongation span of one lunar day, degrees.
pub const LUNAR_DAY_SEGMENT_DEG: f64 = 12.0;

/// Lunar day index, always in [1, 30].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LunarDay(u8);

impl LunarDay {
    pub const FIRST: LunarDay = LunarDay(1);
    pub const LAST: LunarDay = LunarDay(DAYS_IN_CYCLE);

    /// Day `n`, or `None` outside [1, 30].
    pub const fn new(n: u8) -> Option<Self> {
        if n >= 1 && n <= DAYS_IN_CYCLE {
            Some(Self(n))
        } else {
            None
        }
    }

    /// The 1-based day number.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// All days in cycle order.
    pub fn all() -> impl Iterator<Item = LunarDay> {
        (1..=DAYS_IN_CYCLE).map(LunarDay)
    }
}

impl fmt::Display for LunarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lunar day for an elongation in degrees.
///
/// `floor(deg / 12) + 1`, clamped into [1, 30]. Exactly 360 deg lands on
/// day 30 and small negative rounding residue on day 1. NaN maps to day 1;
/// callers reject non-finite readings before getting here.
pub fn lunar_day_from_elongation(elongation_deg: f64) -> LunarDay {
    let raw = (elongation_deg / LUNAR_DAY_SEGMENT_DEG).floor() + 1.0;
    let clamped = raw.max(1.0).min(f64::from(DAYS_IN_CYCLE));
    LunarDay(clamped as u8)
}
