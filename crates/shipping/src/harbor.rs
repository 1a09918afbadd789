//! Harbor descriptor and tide offset adjustment.

use serde::{Deserialize, Serialize};

use lunara_tide::TideLevel;

/// A harbor with a local tide offset.
///
/// The offset models geography: sheltered coves dampen the open-sea
/// tide (negative), narrow straits amplify it (positive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Harbor {
    /// Stable identifier used for lookup.
    pub id: String,
    /// Human-readable harbor name.
    pub name: String,
    /// Rank offset applied to the open-sea tide level.
    pub tide_offset: i8,
    /// Pilotage note shown alongside forecasts.
    pub note: String,
}

impl Harbor {
    fn new(id: &str, name: &str, tide_offset: i8, note: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            tide_offset,
            note: note.to_string(),
        }
    }
}

/// The almanac's built-in harbor roster.
pub fn default_harbors() -> Vec<Harbor> {
    vec![
        Harbor::new("west-crossing", "Western crossing port", 0, "Exposed channel surge"),
        Harbor::new("east-crossing", "Eastern crossing port", 0, "Channel amplification"),
        Harbor::new("gulf-capital", "Southern gulf capital", -1, "Sheltered gulf dampening"),
        Harbor::new("southern-harbor", "Southern harbor", -1, "Cove sheltering"),
        Harbor::new("strait-city", "Strait trade city", 1, "Narrow strait currents"),
    ]
}

/// Shifts a tide level by a harbor offset, clamped to the valid rank
/// range. Clamping, not wrapping: a sheltered cove cannot push Low
/// below Low, nor a strait push Mega past Mega.
pub fn adjust_tide(tide: TideLevel, offset: i8) -> TideLevel {
    let rank = (tide.rank() as i16 + offset as i16).clamp(0, TideLevel::ORDER.len() as i16 - 1);
    TideLevel::ORDER[rank as usize]
}
