//! Tide level enumeration and rank arithmetic.

use serde::{Deserialize, Serialize};

/// Banded tide intensity, ordered `Low < Moderate < High < Mega`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum TideLevel {
    Low,
    Moderate,
    High,
    Mega,
}

impl TideLevel {
    /// All levels in ascending rank order.
    pub const ORDER: [TideLevel; 4] = [Self::Low, Self::Moderate, Self::High, Self::Mega];

    /// Ordinal rank of this level (Low = 0 .. Mega = 3).
    pub fn rank(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Moderate => 1,
            Self::High => 2,
            Self::Mega => 3,
        }
    }

    /// Bands a raw tide strength into a level.
    ///
    /// Thresholds are inclusive on the lower bound of each band:
    /// exactly 0.95 is Mega, exactly 0.72 is High, exactly 0.46 is
    /// Moderate.
    pub fn from_strength(strength: f64) -> Self {
        if strength >= 0.95 {
            Self::Mega
        } else if strength >= 0.72 {
            Self::High
        } else if strength >= 0.46 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

impl std::fmt::Display for TideLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Mega => "Mega",
        };
        f.write_str(name)
    }
}
