//! Tide strength from phase alignment and orbital-distance modulation.

use crate::level::TideLevel;

/// Anomalistic period of the major moon, in days. Distance variation
/// cycles on a different beat than the 30-day phase cycle.
const MAJOR_ANOMALISTIC_PERIOD: f64 = 33.0;

/// Anomalistic period of the weekly moon, in days.
const WEEKLY_ANOMALISTIC_PERIOD: f64 = 8.2;

/// Eccentricity-like constant for the major moon's orbit.
const MAJOR_ECCENTRICITY: f64 = 0.08;

/// Eccentricity-like constant for the weekly moon's orbit.
const WEEKLY_ECCENTRICITY: f64 = 0.12;

/// Weight of the major moon in the combined distance scale. The major
/// moon dominates tidal force.
const MAJOR_WEIGHT: f64 = 0.85;

/// Simulated distance-scale factor for one moon on one day.
///
/// The anomaly angle walks the moon's anomalistic cycle; the inverse
/// cube amplifies tide strength when the moon is simulated-closest.
fn distance_scale(absolute_day: u64, anomalistic_period: f64, eccentricity: f64) -> f64 {
    let anomaly = std::f64::consts::TAU * (absolute_day as f64).rem_euclid(anomalistic_period)
        / anomalistic_period;
    1.0 / (1.0 - eccentricity * anomaly.cos()).powi(3)
}

/// Computes the raw tide strength for a day.
///
/// Alignment of the two moons' phases (circular distance, 0 = aligned)
/// sets the base score in [-1, 1]; each moon's distance scale then
/// modulates it. Mega tides require alignment and simulated proximity
/// to coincide, which keeps them rare.
pub fn tide_strength(major_phase: f64, minor_phase: f64, absolute_day: u64) -> f64 {
    let mut phase_diff = (major_phase - minor_phase).abs();
    phase_diff = phase_diff.min(1.0 - phase_diff);
    let alignment_score = 1.0 - phase_diff * 2.0;

    let major_scale = distance_scale(absolute_day, MAJOR_ANOMALISTIC_PERIOD, MAJOR_ECCENTRICITY);
    let weekly_scale = distance_scale(absolute_day, WEEKLY_ANOMALISTIC_PERIOD, WEEKLY_ECCENTRICITY);
    let distance_weighted_scale =
        major_scale * MAJOR_WEIGHT + weekly_scale * (1.0 - MAJOR_WEIGHT);

    alignment_score * distance_weighted_scale
}

/// Computes and bands the tide level for a day.
pub fn tide_level(major_phase: f64, minor_phase: f64, absolute_day: u64) -> TideLevel {
    TideLevel::from_strength(tide_strength(major_phase, minor_phase, absolute_day))
}
