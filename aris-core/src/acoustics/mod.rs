//! Acoustic physics shared by the settings model.

use crate::units::{Distance, Temperature, Velocity};

/// Atmospheric pressure at sea level, in PSI.
const ATMOSPHERIC_PRESSURE_PSI: f64 = 14.6959;

/// Meters of fresh-water column per PSI of gauge pressure.
const METERS_PER_PSI: f64 = 0.702398;

/// Relative water density in 5 °C bins over 0–30 °C.
///
/// Empirical device calibration tables; copied, not derived.
const FRESH_DENSITY: [f64; 7] = [1.0000, 1.0000, 0.9997, 0.9991, 0.9982, 0.9971, 0.9957];
const BRACKISH_DENSITY: [f64; 7] = [1.0121, 1.0118, 1.0115, 1.0110, 1.0103, 1.0096, 1.0087];
const SEAWATER_DENSITY: [f64; 7] = [1.0281, 1.0277, 1.0271, 1.0259, 1.0247, 1.0233, 1.0218];

/// The speed of sound in water.
///
/// Medwin's simplified equation in temperature, depth, and salinity. Valid
/// over the operating envelope of the sonar (0–35 °C, 0–1000 m, 0–45 PPT).
#[must_use]
pub fn speed_of_sound(water_temp: Temperature, depth: Distance, salinity_ppt: f64) -> Velocity {
    let t = water_temp.degrees_celsius();
    let d = depth.meters();
    let s = salinity_ppt;
    Velocity::from_meters_per_second(
        1449.2 + 4.6 * t - 0.055 * t * t + 0.00029 * t * t * t
            + (1.34 - 0.010 * t) * (s - 35.0)
            + 0.016 * d,
    )
}

/// Water depth derived from absolute pressure.
///
/// Gauge pressure is converted to a fresh-water column height and corrected
/// by the relative density of the water, looked up by salinity class
/// (≥35 PPT seawater, ≥15 PPT brackish, fresh otherwise) and 5 °C
/// temperature bin.
#[must_use]
pub fn depth_from_pressure(
    pressure_psi: f64,
    water_temp: Temperature,
    salinity_ppt: f64,
) -> Distance {
    let table = if salinity_ppt >= 35.0 {
        &SEAWATER_DENSITY
    } else if salinity_ppt >= 15.0 {
        &BRACKISH_DENSITY
    } else {
        &FRESH_DENSITY
    };
    let bin = ((water_temp.degrees_celsius() / 5.0).round() as isize)
        .clamp(0, table.len() as isize - 1) as usize;
    Distance::from_meters((pressure_psi - ATMOSPHERIC_PRESSURE_PSI) * METERS_PER_PSI / table[bin])
}
