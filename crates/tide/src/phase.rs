//! Moon phase fraction and qualitative phase names.

use serde::{Deserialize, Serialize};

/// Synodic period of the major moon, in days. One full phase cycle
/// spans exactly one calendar month.
pub const MAJOR_SYNODIC_PERIOD: f64 = 30.0;

/// Synodic period of the weekly moon, in days. Deliberately not a
/// whole number, so its phases drift against the 7-day week.
pub const WEEKLY_SYNODIC_PERIOD: f64 = 7.6;

/// Qualitative phase of a moon, banded from its phase fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseName {
    New,
    Waxing,
    Full,
    Waning,
}

impl PhaseName {
    /// Bands a phase fraction in [0, 1) into a qualitative name.
    ///
    /// The New band wraps around zero (phase < 0.125 or >= 0.875);
    /// Full is centered exactly on phase 0.5.
    pub fn from_phase(phase: f64) -> Self {
        if !(0.125..0.875).contains(&phase) {
            Self::New
        } else if phase < 0.375 {
            Self::Waxing
        } else if phase < 0.625 {
            Self::Full
        } else {
            Self::Waning
        }
    }

    /// Returns the glyph used for this phase in almanac output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::New => "\u{1f311}",
            Self::Waxing => "\u{1f313}",
            Self::Full => "\u{1f315}",
            Self::Waning => "\u{1f317}",
        }
    }
}

impl std::fmt::Display for PhaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::New => "New",
            Self::Waxing => "Waxing",
            Self::Full => "Full",
            Self::Waning => "Waning",
        };
        f.write_str(name)
    }
}

/// Computes a moon's phase fraction for an absolute day.
///
/// Returns `(day mod period) / period`, a value in [0, 1) that grows
/// linearly and wraps at period boundaries. `rem_euclid` keeps the
/// result in range for the weekly moon's fractional period.
pub fn phase(absolute_day: u64, period: f64) -> f64 {
    (absolute_day as f64).rem_euclid(period) / period
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn phase_wraps_at_period() {
        assert_relative_eq!(phase(0, MAJOR_SYNODIC_PERIOD), 0.0);
        assert_relative_eq!(phase(15, MAJOR_SYNODIC_PERIOD), 0.5);
        assert_relative_eq!(phase(30, MAJOR_SYNODIC_PERIOD), 0.0);
        assert_relative_eq!(phase(45, MAJOR_SYNODIC_PERIOD), 0.5);
    }

    #[test]
    fn fractional_period_stays_in_range() {
        for day in 0..1000 {
            let p = phase(day, WEEKLY_SYNODIC_PERIOD);
            assert!((0.0..1.0).contains(&p), "day {day}: phase {p} out of range");
        }
    }

    #[test]
    fn banding_boundaries() {
        assert_eq!(PhaseName::from_phase(0.0), PhaseName::New);
        assert_eq!(PhaseName::from_phase(0.124), PhaseName::New);
        assert_eq!(PhaseName::from_phase(0.125), PhaseName::Waxing);
        assert_eq!(PhaseName::from_phase(0.374), PhaseName::Waxing);
        assert_eq!(PhaseName::from_phase(0.375), PhaseName::Full);
        assert_eq!(PhaseName::from_phase(0.5), PhaseName::Full);
        assert_eq!(PhaseName::from_phase(0.624), PhaseName::Full);
        assert_eq!(PhaseName::from_phase(0.625), PhaseName::Waning);
        assert_eq!(PhaseName::from_phase(0.874), PhaseName::Waning);
        assert_eq!(PhaseName::from_phase(0.875), PhaseName::New);
        assert_eq!(PhaseName::from_phase(0.999), PhaseName::New);
    }

    #[test]
    fn display_matches_serde_names() {
        assert_eq!(PhaseName::New.to_string(), "New");
        assert_eq!(PhaseName::Waning.to_string(), "Waning");
    }
}
