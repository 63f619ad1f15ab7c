//! Automatic derivation of frequency, pulse width, and sample period from
//! the imaging window and water conditions.

use aris_core::units::{Distance, FineDuration, Salinity, Temperature};

use crate::{settings::Frequency, system::SystemConfiguration};

/// The window-end distance beyond which the low band images better.
#[must_use]
pub fn crossover_distance(
    config: &SystemConfiguration,
    salinity: Salinity,
    water_temp: Temperature,
) -> Distance {
    config.frequency_crossover().distance(salinity, water_temp)
}

/// The best frequency band for a window ending at `window_end`.
#[must_use]
pub fn best_frequency(
    config: &SystemConfiguration,
    salinity: Salinity,
    water_temp: Temperature,
    window_end: Distance,
) -> Frequency {
    if window_end <= crossover_distance(config, salinity, water_temp) {
        Frequency::High
    } else {
        Frequency::Low
    }
}

/// The automatic pulse width for the band and window end.
#[must_use]
pub fn auto_pulse_width(
    config: &SystemConfiguration,
    frequency: Frequency,
    window_end: Distance,
) -> FineDuration {
    config.auto_pulse_width(frequency).evaluate(window_end)
}

/// The automatic sample period for the window end and water temperature.
#[must_use]
pub fn auto_sample_period(
    config: &SystemConfiguration,
    window_end: Distance,
    water_temp: Temperature,
) -> FineDuration {
    config.auto_sample_period().evaluate(window_end, water_temp)
}
