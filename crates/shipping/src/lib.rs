//! # lunara-shipping
//!
//! Logistics aggregations over a generated almanac year: month
//! grouping, harbor-local tide adjustment, severe-tide listings, and
//! safe shipping window detection.
//!
//! All operations consume day records read-only and derive new
//! values; nothing here mutates an [`lunara_calendar::AlmanacYear`].
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `harbor` | Harbor descriptor and tide offset adjustment |
//! | `group` | Partition a year's days by month |
//! | `severe` | Harbor-adjusted day views and severe-tide listing |
//! | `window` | Safe shipping window detection |

mod group;
mod harbor;
mod severe;
mod window;

pub use group::group_by_month;
pub use harbor::{adjust_tide, default_harbors, Harbor};
pub use severe::{adjusted_days, severe_tide_days, HarborDay};
pub use window::{shipping_windows, Window};
