//! Conversions between imaging-window geometry and sample timing.
//!
//! All functions are pure; the factor of 2 throughout reflects round-trip
//! time of flight (sound travels to the target and back).

use aris_core::{
    units::{Distance, FineDuration, Salinity, Velocity},
    Range,
};

use crate::{settings::ObservedConditions, system::SystemConfiguration};

/// The range at which sampling begins.
#[must_use]
pub fn window_start(sample_start_delay: FineDuration, speed_of_sound: Velocity) -> Distance {
    speed_of_sound * sample_start_delay / 2.0
}

/// The length of the imaging window covered by `sample_count` samples.
#[must_use]
pub fn window_length(
    sample_count: u32,
    sample_period: FineDuration,
    speed_of_sound: Velocity,
) -> Distance {
    speed_of_sound * (sample_period * sample_count) / 2.0
}

/// The transmit-to-sampling delay that puts the window start at
/// `window_start`.
#[must_use]
pub fn sample_start_delay(window_start: Distance, speed_of_sound: Velocity) -> FineDuration {
    window_start * 2.0 / speed_of_sound
}

/// The sample-start delay that pins the window end at `window_end` given the
/// window's duration in time.
///
/// Recomputing the delay from a moved start edge alone would let the
/// stationary end edge drift with rounding; back-solving from the end keeps
/// it exact.
#[must_use]
pub fn sample_start_delay_for_end(
    window_end: Distance,
    sample_count: u32,
    sample_period: FineDuration,
    speed_of_sound: Velocity,
) -> FineDuration {
    sample_start_delay(window_end, speed_of_sound) - sample_period * sample_count
}

/// The number of samples that covers `window_length` at `sample_period`,
/// rounded away from zero.
#[must_use]
pub fn fit_sample_count_to(
    window_length: Distance,
    sample_period: FineDuration,
    speed_of_sound: Velocity,
) -> u32 {
    let samples = (window_length * 2.0 / speed_of_sound) / sample_period;
    samples.round().max(0.0) as u32
}

/// The sample period that covers `window_length` with `sample_count`
/// samples, rounded up to the next whole microsecond.
#[must_use]
pub fn fit_sample_period_to(
    window_length: Distance,
    sample_count: u32,
    speed_of_sound: Velocity,
) -> FineDuration {
    ((window_length * 2.0 / speed_of_sound) / sample_count as f64).ceil_to_microsecond()
}

/// The shortest window the hardware can express under the given sample-count
/// limits.
#[must_use]
pub fn minimum_window_length(
    config: &SystemConfiguration,
    conditions: &ObservedConditions,
    salinity: Salinity,
    sample_count_limits: &Range<u32>,
) -> Distance {
    window_length(
        sample_count_limits.minimum(),
        config.sample_period_limits().minimum(),
        conditions.speed_of_sound(salinity),
    )
}
