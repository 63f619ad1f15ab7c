use std::sync::OnceLock;

use aris_core::{
    units::{Distance, FineDuration, Rate, Salinity, Temperature},
    Range,
};
use serde::{Deserialize, Serialize};

use super::{PingMode, SystemType};
use crate::settings::Frequency;

/// Frequency crossover data for one system type.
///
/// The crossover is the window-end distance beyond which the low acoustic
/// frequency images better than the high one. Base distances are calibrated
/// at 15 °C and corrected linearly with water temperature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrequencyCrossover {
    fresh: Distance,
    brackish: Distance,
    seawater: Distance,
    meters_per_degree: f64,
}

impl FrequencyCrossover {
    /// The crossover distance for the given water conditions.
    #[must_use]
    pub fn distance(&self, salinity: Salinity, water_temp: Temperature) -> Distance {
        let base = match salinity {
            Salinity::Fresh => self.fresh,
            Salinity::Brackish => self.brackish,
            Salinity::Seawater => self.seawater,
        };
        base + Distance::from_meters(
            self.meters_per_degree * (water_temp.degrees_celsius() - 15.0),
        )
    }
}

/// Empirical pulse-width line for one (system type, frequency band) pair.
///
/// Device tuning constants; copied, not derived.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseWidthLine {
    microseconds_per_meter: f64,
    offset: FineDuration,
    limits: Range<FineDuration>,
}

impl PulseWidthLine {
    /// The automatic pulse width for a window ending at `window_end`, in
    /// whole microseconds.
    #[must_use]
    pub fn evaluate(&self, window_end: Distance) -> FineDuration {
        let raw = self.offset
            + FineDuration::from_microseconds(self.microseconds_per_meter * window_end.meters());
        self.limits.clamp(raw.floor_to_microsecond())
    }
}

/// Empirical sample-period line for one system type.
///
/// The period grows with the window end and is corrected for water
/// temperature around the 15 °C calibration point; the correction slope may
/// differ above and below that point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePeriodLine {
    microseconds_per_meter: f64,
    offset: FineDuration,
    cold_slope: f64,
    warm_slope: f64,
    limits: Range<FineDuration>,
}

impl SamplePeriodLine {
    /// The automatic sample period for a window ending at `window_end`, in
    /// whole microseconds.
    #[must_use]
    pub fn evaluate(&self, window_end: Distance, water_temp: Temperature) -> FineDuration {
        let t = water_temp.degrees_celsius();
        let slope = if t < 15.0 {
            self.cold_slope
        } else {
            self.warm_slope
        };
        let raw = self.offset
            + FineDuration::from_microseconds(
                self.microseconds_per_meter * window_end.meters() + (15.0 - t) * slope,
            );
        self.limits.clamp(raw.ceil_to_microsecond())
    }
}

/// The fixed imaging windows offered per system type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowPreset {
    Short,
    Medium,
    Long,
}

impl WindowPreset {
    const fn index(self) -> usize {
        match self {
            WindowPreset::Short => 0,
            WindowPreset::Medium => 1,
            WindowPreset::Long => 2,
        }
    }
}

/// The static configuration table of one hardware model.
///
/// Read-only after one-time registry construction; see
/// [`SystemConfiguration::get`].
#[derive(Clone, Debug, PartialEq)]
pub struct SystemConfiguration {
    system_type: SystemType,
    available_ping_modes: &'static [PingMode],
    default_ping_mode: PingMode,
    frame_rate_limits: Range<Rate>,
    sample_count_device_limits: Range<u32>,
    sample_count_preferred_limits: Range<u32>,
    sample_period_limits: Range<FineDuration>,
    sample_start_delay_limits: Range<FineDuration>,
    receiver_gain_limits: Range<u32>,
    window_start_limits: Range<Distance>,
    window_end_limits: Range<Distance>,
    cycle_period_maximum: FineDuration,
    cycle_period_margin: FineDuration,
    small_period_factor: f64,
    large_period_factor: f64,
    pulse_width_limits_high: Range<FineDuration>,
    pulse_width_limits_low: Range<FineDuration>,
    max_cumulative_pulse_per_second: FineDuration,
    frequency_crossover: FrequencyCrossover,
    auto_pulse_width_high: PulseWidthLine,
    auto_pulse_width_low: PulseWidthLine,
    auto_sample_period: SamplePeriodLine,
    window_presets: [(Distance, Distance); 3],
    nudge_step: Distance,
}

static REGISTRY: OnceLock<[SystemConfiguration; 3]> = OnceLock::new();

impl SystemConfiguration {
    /// The configuration for `system_type`.
    ///
    /// The registry is built once, in full, on first use; configurations are
    /// never mutated afterwards, so the returned reference is safe to hold
    /// and share.
    #[must_use]
    pub fn get(system_type: SystemType) -> &'static SystemConfiguration {
        &REGISTRY.get_or_init(build_registry)[system_type.index()]
    }

    /// The system type this configuration describes.
    #[must_use]
    pub const fn system_type(&self) -> SystemType {
        self.system_type
    }

    /// The ping modes the model supports.
    #[must_use]
    pub const fn available_ping_modes(&self) -> &'static [PingMode] {
        self.available_ping_modes
    }

    /// The factory ping mode of the model.
    #[must_use]
    pub const fn default_ping_mode(&self) -> PingMode {
        self.default_ping_mode
    }

    /// The hardware frame rate limits.
    #[must_use]
    pub const fn frame_rate_limits(&self) -> Range<Rate> {
        self.frame_rate_limits
    }

    /// The hardware sample count limits.
    #[must_use]
    pub const fn sample_count_device_limits(&self) -> Range<u32> {
        self.sample_count_device_limits
    }

    /// The preferred sample count limits used by guided adjustment.
    #[must_use]
    pub const fn sample_count_preferred_limits(&self) -> Range<u32> {
        self.sample_count_preferred_limits
    }

    /// The hardware sample period limits.
    #[must_use]
    pub const fn sample_period_limits(&self) -> Range<FineDuration> {
        self.sample_period_limits
    }

    /// The hardware sample start delay limits.
    #[must_use]
    pub const fn sample_start_delay_limits(&self) -> Range<FineDuration> {
        self.sample_start_delay_limits
    }

    /// The hardware receiver gain limits.
    #[must_use]
    pub const fn receiver_gain_limits(&self) -> Range<u32> {
        self.receiver_gain_limits
    }

    /// The limits on the imaging window start.
    #[must_use]
    pub const fn window_start_limits(&self) -> Range<Distance> {
        self.window_start_limits
    }

    /// The limits on the imaging window end.
    #[must_use]
    pub const fn window_end_limits(&self) -> Range<Distance> {
        self.window_end_limits
    }

    /// The longest cycle period the hardware can time.
    #[must_use]
    pub const fn cycle_period_maximum(&self) -> FineDuration {
        self.cycle_period_maximum
    }

    /// The fixed timing margin added to every cycle period.
    #[must_use]
    pub const fn cycle_period_margin(&self) -> FineDuration {
        self.cycle_period_margin
    }

    /// The cycle period adjustment factor for sample periods of 4 µs or
    /// less.
    #[must_use]
    pub const fn small_period_factor(&self) -> f64 {
        self.small_period_factor
    }

    /// The cycle period adjustment factor for sample periods above 4 µs.
    #[must_use]
    pub const fn large_period_factor(&self) -> f64 {
        self.large_period_factor
    }

    /// The hardware pulse width limits for `frequency`.
    #[must_use]
    pub const fn pulse_width_limits(&self, frequency: Frequency) -> Range<FineDuration> {
        match frequency {
            Frequency::High => self.pulse_width_limits_high,
            Frequency::Low => self.pulse_width_limits_low,
        }
    }

    /// The transmit energy budget: cumulative pulse time allowed per second.
    #[must_use]
    pub const fn max_cumulative_pulse_per_second(&self) -> FineDuration {
        self.max_cumulative_pulse_per_second
    }

    /// The frequency crossover data of the model.
    #[must_use]
    pub const fn frequency_crossover(&self) -> FrequencyCrossover {
        self.frequency_crossover
    }

    /// The automatic pulse width line for `frequency`.
    #[must_use]
    pub const fn auto_pulse_width(&self, frequency: Frequency) -> PulseWidthLine {
        match frequency {
            Frequency::High => self.auto_pulse_width_high,
            Frequency::Low => self.auto_pulse_width_low,
        }
    }

    /// The automatic sample period line of the model.
    #[must_use]
    pub const fn auto_sample_period(&self) -> SamplePeriodLine {
        self.auto_sample_period
    }

    /// The fixed window for `preset`, as (start, end).
    #[must_use]
    pub const fn window_preset(&self, preset: WindowPreset) -> (Distance, Distance) {
        self.window_presets[preset.index()]
    }

    /// The distance one nudge operation moves a window edge.
    #[must_use]
    pub const fn nudge_step(&self) -> Distance {
        self.nudge_step
    }
}

/// Limits shared by every model.
///
/// Constructed before any per-model entry so a partially built registry can
/// never be observed.
struct SharedLimits {
    frame_rate_limits: Range<Rate>,
    sample_count_device_limits: Range<u32>,
    sample_period_limits: Range<FineDuration>,
    sample_start_delay_limits: Range<FineDuration>,
    receiver_gain_limits: Range<u32>,
    cycle_period_margin: FineDuration,
    small_period_factor: f64,
    large_period_factor: f64,
}

fn build_registry() -> [SystemConfiguration; 3] {
    let us = FineDuration::from_microseconds;
    let m = Distance::from_meters;

    let shared = SharedLimits {
        frame_rate_limits: Range::new(Rate::from_hz(1.0), Rate::from_hz(15.0)),
        sample_count_device_limits: Range::new(200, 4000),
        sample_period_limits: Range::new(us(4.0), us(100.0)),
        sample_start_delay_limits: Range::new(us(930.0), us(60_000.0)),
        receiver_gain_limits: Range::new(0, 24),
        cycle_period_margin: us(420.0),
        small_period_factor: 0.02,
        large_period_factor: 0.03,
    };

    let aris_1800 = SystemConfiguration {
        system_type: SystemType::Aris1800,
        available_ping_modes: &[PingMode::Mode1, PingMode::Mode3],
        default_ping_mode: PingMode::Mode3,
        frame_rate_limits: shared.frame_rate_limits,
        sample_count_device_limits: shared.sample_count_device_limits,
        sample_count_preferred_limits: Range::new(600, 3200),
        sample_period_limits: shared.sample_period_limits,
        sample_start_delay_limits: shared.sample_start_delay_limits,
        receiver_gain_limits: shared.receiver_gain_limits,
        window_start_limits: Range::new(m(0.7), m(25.0)),
        window_end_limits: Range::new(m(1.3), m(35.0)),
        cycle_period_maximum: us(80_000.0),
        cycle_period_margin: shared.cycle_period_margin,
        small_period_factor: shared.small_period_factor,
        large_period_factor: shared.large_period_factor,
        pulse_width_limits_high: Range::new(us(4.0), us(40.0)),
        pulse_width_limits_low: Range::new(us(4.0), us(40.0)),
        max_cumulative_pulse_per_second: us(300.0),
        frequency_crossover: FrequencyCrossover {
            fresh: m(15.0),
            brackish: m(14.0),
            seawater: m(13.0),
            meters_per_degree: -0.08,
        },
        auto_pulse_width_high: PulseWidthLine {
            microseconds_per_meter: 1.0,
            offset: us(2.0),
            limits: Range::new(us(4.0), us(40.0)),
        },
        auto_pulse_width_low: PulseWidthLine {
            microseconds_per_meter: 1.3,
            offset: us(3.0),
            limits: Range::new(us(4.0), us(40.0)),
        },
        auto_sample_period: SamplePeriodLine {
            microseconds_per_meter: 1.0,
            offset: us(1.0),
            cold_slope: 0.0,
            warm_slope: 0.0,
            limits: Range::new(us(4.0), us(60.0)),
        },
        window_presets: [(m(0.7), m(5.0)), (m(1.0), m(15.0)), (m(3.0), m(30.0))],
        nudge_step: m(0.5),
    };

    let aris_3000 = SystemConfiguration {
        system_type: SystemType::Aris3000,
        available_ping_modes: &[PingMode::Mode6, PingMode::Mode9],
        default_ping_mode: PingMode::Mode9,
        frame_rate_limits: shared.frame_rate_limits,
        sample_count_device_limits: shared.sample_count_device_limits,
        sample_count_preferred_limits: Range::new(800, 4000),
        sample_period_limits: shared.sample_period_limits,
        sample_start_delay_limits: shared.sample_start_delay_limits,
        receiver_gain_limits: shared.receiver_gain_limits,
        window_start_limits: Range::new(m(0.7), m(12.0)),
        window_end_limits: Range::new(m(1.0), m(20.0)),
        cycle_period_maximum: us(40_000.0),
        cycle_period_margin: shared.cycle_period_margin,
        small_period_factor: shared.small_period_factor,
        large_period_factor: shared.large_period_factor,
        pulse_width_limits_high: Range::new(us(4.0), us(24.0)),
        pulse_width_limits_low: Range::new(us(4.0), us(24.0)),
        max_cumulative_pulse_per_second: us(240.0),
        frequency_crossover: FrequencyCrossover {
            fresh: m(6.0),
            brackish: m(5.5),
            seawater: m(5.0),
            meters_per_degree: -0.03,
        },
        auto_pulse_width_high: PulseWidthLine {
            microseconds_per_meter: 1.2,
            offset: us(1.5),
            limits: Range::new(us(4.0), us(24.0)),
        },
        auto_pulse_width_low: PulseWidthLine {
            microseconds_per_meter: 1.5,
            offset: us(2.0),
            limits: Range::new(us(4.0), us(24.0)),
        },
        auto_sample_period: SamplePeriodLine {
            microseconds_per_meter: 0.9,
            offset: us(1.0),
            cold_slope: 0.0,
            warm_slope: 0.0,
            limits: Range::new(us(4.0), us(40.0)),
        },
        window_presets: [(m(0.7), m(3.0)), (m(1.0), m(8.0)), (m(2.0), m(15.0))],
        nudge_step: m(0.25),
    };

    let aris_1200 = SystemConfiguration {
        system_type: SystemType::Aris1200,
        available_ping_modes: &[PingMode::Mode1],
        default_ping_mode: PingMode::Mode1,
        frame_rate_limits: shared.frame_rate_limits,
        sample_count_device_limits: shared.sample_count_device_limits,
        sample_count_preferred_limits: Range::new(400, 2400),
        sample_period_limits: shared.sample_period_limits,
        sample_start_delay_limits: shared.sample_start_delay_limits,
        receiver_gain_limits: shared.receiver_gain_limits,
        window_start_limits: Range::new(m(0.7), m(40.0)),
        window_end_limits: Range::new(m(1.3), m(80.0)),
        cycle_period_maximum: us(150_000.0),
        cycle_period_margin: shared.cycle_period_margin,
        small_period_factor: shared.small_period_factor,
        large_period_factor: shared.large_period_factor,
        pulse_width_limits_high: Range::new(us(4.0), us(80.0)),
        pulse_width_limits_low: Range::new(us(4.0), us(80.0)),
        max_cumulative_pulse_per_second: us(400.0),
        frequency_crossover: FrequencyCrossover {
            fresh: m(30.0),
            brackish: m(28.0),
            seawater: m(25.0),
            meters_per_degree: -0.15,
        },
        auto_pulse_width_high: PulseWidthLine {
            microseconds_per_meter: 1.1,
            offset: us(4.0),
            limits: Range::new(us(8.0), us(80.0)),
        },
        auto_pulse_width_low: PulseWidthLine {
            microseconds_per_meter: 1.2,
            offset: us(6.0),
            limits: Range::new(us(8.0), us(80.0)),
        },
        auto_sample_period: SamplePeriodLine {
            microseconds_per_meter: 1.1,
            offset: us(2.0),
            cold_slope: 0.2,
            warm_slope: 0.1,
            limits: Range::new(us(4.0), us(100.0)),
        },
        window_presets: [(m(0.7), m(10.0)), (m(2.0), m(25.0)), (m(4.0), m(50.0))],
        nudge_step: m(1.0),
    };

    [aris_1800, aris_3000, aris_1200]
}

#[cfg(test)]
mod tests {
    use super::*;

    // Regression test: the registry must be complete and internally
    // consistent for every model before first use.
    #[test]
    fn registry_is_complete_and_consistent() {
        for system_type in SystemType::ALL {
            let cfg = SystemConfiguration::get(system_type);
            assert_eq!(system_type, cfg.system_type());
            assert!(!cfg.available_ping_modes().is_empty());
            assert!(cfg.available_ping_modes().contains(&cfg.default_ping_mode()));
            assert!(cfg
                .sample_count_device_limits()
                .contains_range(&cfg.sample_count_preferred_limits()));
            assert!(cfg.window_start_limits().minimum() < cfg.window_end_limits().maximum());
            assert!(cfg.cycle_period_margin() > FineDuration::ZERO);
            assert!(cfg.small_period_factor() < cfg.large_period_factor());
            for preset in [WindowPreset::Short, WindowPreset::Medium, WindowPreset::Long] {
                let (start, end) = cfg.window_preset(preset);
                assert!(start < end);
                assert!(cfg.window_start_limits().contains(start));
                assert!(cfg.window_end_limits().contains(end));
            }
            for frequency in [Frequency::High, Frequency::Low] {
                let limits = cfg.pulse_width_limits(frequency);
                assert!(limits.minimum() > FineDuration::ZERO);
                assert!(limits.minimum() < limits.maximum());
            }
            assert!(cfg.nudge_step() > Distance::ZERO);
        }
    }

    #[test]
    fn same_reference_on_every_lookup() {
        let a = SystemConfiguration::get(SystemType::Aris3000);
        let b = SystemConfiguration::get(SystemType::Aris3000);
        assert!(std::ptr::eq(a, b));
    }

    #[rstest::rstest]
    #[case(5.0, SystemType::Aris3000, Salinity::Seawater, 15.0)]
    #[case(6.0, SystemType::Aris3000, Salinity::Fresh, 15.0)]
    // Colder water absorbs less; the crossover moves out.
    #[case(6.15, SystemType::Aris3000, Salinity::Fresh, 10.0)]
    #[case(13.0, SystemType::Aris1800, Salinity::Seawater, 15.0)]
    #[case(25.0, SystemType::Aris1200, Salinity::Seawater, 15.0)]
    fn crossover_distance(
        #[case] expected: f64,
        #[case] system_type: SystemType,
        #[case] salinity: Salinity,
        #[case] temp: f64,
    ) {
        approx::assert_abs_diff_eq!(
            expected,
            SystemConfiguration::get(system_type)
                .frequency_crossover()
                .distance(salinity, Temperature::from_celsius(temp))
                .meters(),
            epsilon = 1e-9
        );
    }

    #[rstest::rstest]
    // 1.2 µs/m · 5 m + 1.5 µs = 7.5 µs, floored.
    #[case(7.0, SystemType::Aris3000, Frequency::High, 5.0)]
    // Below the band minimum.
    #[case(4.0, SystemType::Aris3000, Frequency::High, 1.0)]
    // 1.5 µs/m · 18 m + 2 µs = 29 µs, clamped to 24 µs.
    #[case(24.0, SystemType::Aris3000, Frequency::Low, 18.0)]
    fn auto_pulse_width(
        #[case] expected: f64,
        #[case] system_type: SystemType,
        #[case] frequency: Frequency,
        #[case] window_end: f64,
    ) {
        assert_eq!(
            FineDuration::from_microseconds(expected),
            SystemConfiguration::get(system_type)
                .auto_pulse_width(frequency)
                .evaluate(Distance::from_meters(window_end))
        );
    }

    #[rstest::rstest]
    // 0.9 µs/m · 10 m + 1 µs = 10 µs.
    #[case(10.0, SystemType::Aris3000, 10.0, 15.0)]
    // Short window clamps to the hardware minimum.
    #[case(4.0, SystemType::Aris3000, 1.0, 15.0)]
    // Cold water lengthens the period on the 1200: 1.1·20 + 2 + 0.2·10 = 26.
    #[case(26.0, SystemType::Aris1200, 20.0, 5.0)]
    // Warm water shortens it: 1.1·20 + 2 − 0.1·10 = 23.
    #[case(23.0, SystemType::Aris1200, 20.0, 25.0)]
    fn auto_sample_period(
        #[case] expected: f64,
        #[case] system_type: SystemType,
        #[case] window_end: f64,
        #[case] temp: f64,
    ) {
        assert_eq!(
            FineDuration::from_microseconds(expected),
            SystemConfiguration::get(system_type)
                .auto_sample_period()
                .evaluate(
                    Distance::from_meters(window_end),
                    Temperature::from_celsius(temp)
                )
        );
    }
}
