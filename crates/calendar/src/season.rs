//! Season enum and the month-to-season map.

use serde::{Deserialize, Serialize};

use crate::NUM_MONTHS;

/// The four seasons, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// All seasons in calendar order.
    pub const ALL: [Season; 4] = [Self::Spring, Self::Summer, Self::Autumn, Self::Winter];
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        };
        f.write_str(name)
    }
}

/// Mapping from month number (1..=13) to season.
///
/// One season holds four consecutive months, the other three hold
/// three each; month numbering is contiguous per season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonMap([Season; NUM_MONTHS as usize]);

impl SeasonMap {
    /// Builds the map for a year whose extra month falls in `extra`.
    ///
    /// Walks Spring through Winter, assigning four month numbers to
    /// the chosen season and three to each of the others.
    pub fn new(extra: Season) -> Self {
        let mut months = [Season::Spring; NUM_MONTHS as usize];
        let mut next = 0usize;
        for season in Season::ALL {
            let count = if season == extra { 4 } else { 3 };
            for _ in 0..count {
                months[next] = season;
                next += 1;
            }
        }
        Self(months)
    }

    /// Season of the given month.
    ///
    /// # Panics
    ///
    /// Panics if `month` is outside 1..=13.
    pub fn of(&self, month: u8) -> Season {
        assert!(
            (1..=NUM_MONTHS).contains(&month),
            "month {month} out of range 1..=13"
        );
        self.0[(month - 1) as usize]
    }

    /// Number of months assigned to `season`.
    pub fn month_count(&self, season: Season) -> usize {
        self.0.iter().filter(|&&s| s == season).count()
    }
}
