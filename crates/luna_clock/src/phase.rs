//! Moon phase classification from the illuminated percentage.

use std::fmt;

/// Coarse phase label.
///
/// The partition is asymmetric: only an exact 0 % is a new
/// moon and only an exact 50 % is first quarter, while everything from
/// 99 % up counts as full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    /// Exactly 0 % lit.
    NewMoon,
    /// Between 0 % and 50 %, exclusive.
    Waxing,
    /// Exactly 50 % lit.
    FirstQuarter,
    /// Between 50 % and 99 %, exclusive.
    Waning,
    /// 99 % and above.
    FullMoon,
}

/// All phases in classification order.
pub const ALL_PHASES: [MoonPhase; 5] = [
    MoonPhase::NewMoon,
    MoonPhase::Waxing,
    MoonPhase::FirstQuarter,
    MoonPhase::Waning,
    MoonPhase::FullMoon,
];

/// Lower bound of the full-moon band, percent.
pub const FULL_MOON_THRESHOLD_PCT: f64 = 99.0;

impl MoonPhase {
    /// Classify a raw illuminated percentage.
    pub fn classify(percent: f64) -> Self {
        if percent == 0.0 {
            Self::NewMoon
        } else if percent > 0.0 && percent < 50.0 {
            Self::Waxing
        } else if percent == 50.0 {
            Self::FirstQuarter
        } else if percent > 50.0 && percent < FULL_MOON_THRESHOLD_PCT {
            Self::Waning
        } else {
            Self::FullMoon
        }
    }

    /// Lowercase English label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewMoon => "new moon",
            Self::Waxing => "waxing",
            Self::FirstQuarter => "first quarter",
            Self::Waning => "waning",
            Self::FullMoon => "full moon",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Phase label together with the unrounded illuminated percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseReading {
    pub phase: MoonPhase,
    /// Illuminated percentage in [0, 100], unrounded.
    pub percent: f64,
}

impl PhaseReading {
    pub fn from_percent(percent: f64) -> Self {
        Self {
            phase: MoonPhase::classify(percent),
            percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_boundaries() {
        assert_eq!(MoonPhase::classify(0.0), MoonPhase::NewMoon);
        assert_eq!(MoonPhase::classify(50.0), MoonPhase::FirstQuarter);
        assert_eq!(MoonPhase::classify(99.0), MoonPhase::FullMoon);
        assert_eq!(MoonPhase::classify(100.0), MoonPhase::FullMoon);
    }

    #[test]
    fn open_intervals() {
        assert_eq!(MoonPhase::classify(25.0), MoonPhase::Waxing);
        assert_eq!(MoonPhase::classify(75.0), MoonPhase::Waning);
        assert_eq!(MoonPhase::classify(99.5), MoonPhase::FullMoon);
        assert_eq!(MoonPhase::classify(0.2), MoonPhase::Waxing);
        assert_eq!(MoonPhase::classify(49.9), MoonPhase::Waxing);
        assert_eq!(MoonPhase::classify(50.1), MoonPhase::Waning);
        assert_eq!(MoonPhase::classify(98.9), MoonPhase::Waning);
    }

    #[test]
    fn near_boundaries_stay_in_open_bands() {
        assert_eq!(MoonPhase::classify(0.04), MoonPhase::Waxing);
        assert_eq!(MoonPhase::classify(49.96), MoonPhase::Waxing);
        assert_eq!(MoonPhase::classify(50.04), MoonPhase::Waning);
        assert_eq!(MoonPhase::classify(98.96), MoonPhase::Waning);
    }

    #[test]
    fn labels() {
        let labels: Vec<&str> = ALL_PHASES.iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            ["new moon", "waxing", "first quarter", "waning", "full moon"]
        );
    }

    #[test]
    fn reading_keeps_raw_percent() {
        let r = PhaseReading::from_percent(67.864_2);
        assert_eq!(r.phase, MoonPhase::Waning);
        assert_eq!(r.percent, 67.864_2);
    }
}
