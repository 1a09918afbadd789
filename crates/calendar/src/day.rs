//! The immutable per-day record.

use serde::{Deserialize, Serialize};

use lunara_tide::{PhaseName, TideLevel};

use crate::season::Season;

/// One calendar day, immutable once generated.
///
/// Field declaration order is the export order: serializers rely on
/// it for stable JSON key order and CSV columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    /// Day offset within the year, starting at 0 on the opening
    /// festival day.
    pub absolute_day: u32,
    /// Month number, 1..=13.
    pub month: u8,
    /// Day within the month. 0 and 31 are reserved markers for the
    /// two intercalary days; ordinary days are 1..=30.
    pub day: u8,
    /// Weekday, 1..=7, cyclic across the whole year.
    pub weekday: u8,
    /// Season of this day. Intercalary days are pinned to Spring
    /// (year start) and Winter (year end).
    pub season: Season,
    /// Major moon phase name.
    pub major: PhaseName,
    /// Weekly moon phase name.
    pub minor: PhaseName,
    /// Major moon phase fraction in [0, 1).
    pub major_phase: f64,
    /// Weekly moon phase fraction in [0, 1).
    pub minor_phase: f64,
    /// Banded tide level.
    pub tide: TideLevel,
    /// Event label, or empty when no event falls on this day. At most
    /// one event per day.
    pub event: String,
    /// True only for the two festival days outside the month
    /// structure.
    pub intercalary: bool,
}
