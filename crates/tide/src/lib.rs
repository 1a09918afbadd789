//! # lunara-tide
//!
//! Moon phase and tide strength models for the dual-moon world.
//!
//! The world has two moons: the major moon (synodic period 30 days,
//! governs the months) and the weekly moon (synodic period 7.6 days,
//! governs the weeks). Tide strength on any day is driven by how
//! closely the two moons' phases align, modulated by each moon's
//! simulated orbital-distance cycle (its anomalistic period), which
//! runs on a different beat than its phase.
//!
//! ```mermaid
//! graph LR
//!     A["absolute day"] -->|"phase()"| B["phase fraction [0,1)"]
//!     B -->|"PhaseName::from_phase()"| C["New / Waxing / Full / Waning"]
//!     B -->|"tide_strength()"| D["strength"]
//!     A -->|"anomalistic modulation"| D
//!     D -->|"TideLevel::from_strength()"| E["Low / Moderate / High / Mega"]
//! ```
//!
//! Every function in this crate is a total pure function: no I/O, no
//! state, no error paths.

mod level;
mod phase;
mod strength;

pub use level::TideLevel;
pub use phase::{PhaseName, phase, MAJOR_SYNODIC_PERIOD, WEEKLY_SYNODIC_PERIOD};
pub use strength::{tide_level, tide_strength};
