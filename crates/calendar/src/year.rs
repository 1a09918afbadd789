//! Generated year container.

use crate::day::DayRecord;
use crate::season::{Season, SeasonMap};

/// A fully generated almanac year: 392 ordered day records plus the
/// year's season layout.
///
/// Immutable once built. Regenerating the same year number yields an
/// identical value, so callers may regenerate per request or memoize
/// by year number without correctness concerns.
#[derive(Debug, Clone, PartialEq)]
pub struct AlmanacYear {
    year: i32,
    extra_month_season: Season,
    season_map: SeasonMap,
    days: Vec<DayRecord>,
}

impl AlmanacYear {
    pub(crate) fn new(
        year: i32,
        extra_month_season: Season,
        season_map: SeasonMap,
        days: Vec<DayRecord>,
    ) -> Self {
        Self {
            year,
            extra_month_season,
            season_map,
            days,
        }
    }

    /// The year number this almanac was generated for.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The season holding four months this year.
    pub fn extra_month_season(&self) -> Season {
        self.extra_month_season
    }

    /// The month-to-season map for this year.
    pub fn season_map(&self) -> &SeasonMap {
        &self.season_map
    }

    /// All 392 day records in calendar order.
    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    /// Consumes the year and returns its day records.
    pub fn into_days(self) -> Vec<DayRecord> {
        self.days
    }
}
