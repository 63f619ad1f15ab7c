mod focus;
mod frequency;
mod interpacket_delay;
mod observed_conditions;
mod window_bounds;

pub use focus::FocusPosition;
pub use frequency::Frequency;
pub use interpacket_delay::InterpacketDelay;
pub use observed_conditions::ObservedConditions;
pub use window_bounds::WindowBounds;

use aris_core::units::{Distance, FineDuration, Rate, Salinity};
use serde::Serialize;

use crate::{
    calculations, constraints,
    error::SettingsError,
    max_frame_rate,
    system::{PingMode, SystemConfiguration, SystemType},
};

/// The named fields of a new settings snapshot.
///
/// Construction goes through [`AcousticSettings::new`], which validates the
/// fields below and derives the maximum frame rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettingsParams {
    pub system_type: SystemType,
    pub frame_rate: Rate,
    pub sample_count: u32,
    pub sample_start_delay: FineDuration,
    pub sample_period: FineDuration,
    pub pulse_width: FineDuration,
    pub ping_mode: PingMode,
    pub enable_transmit: bool,
    pub enable_150_volts: bool,
    pub frequency: Frequency,
    pub receiver_gain: u32,
    pub focus_position: FocusPosition,
    pub anti_aliasing: FineDuration,
    pub interpacket_delay: InterpacketDelay,
    pub salinity: Salinity,
}

/// An immutable snapshot of the full device configuration.
///
/// Snapshots are never mutated in place; `with_*` operations and the window
/// adjustments in [`crate::adjust`] produce new snapshots, and an operation
/// that changes nothing returns a value equal to its input so callers can
/// detect no-ops cheaply.
///
/// The maximum frame rate is derived from the sample geometry at every
/// construction and is not independently settable.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AcousticSettings {
    system_type: SystemType,
    frame_rate: Rate,
    sample_count: u32,
    sample_start_delay: FineDuration,
    sample_period: FineDuration,
    pulse_width: FineDuration,
    ping_mode: PingMode,
    enable_transmit: bool,
    enable_150_volts: bool,
    frequency: Frequency,
    receiver_gain: u32,
    focus_position: FocusPosition,
    anti_aliasing: FineDuration,
    interpacket_delay: InterpacketDelay,
    salinity: Salinity,
    maximum_frame_rate: Rate,
}

impl AcousticSettings {
    /// Creates a new [`AcousticSettings`].
    ///
    /// The sample period must lie within the hardware limits of the system
    /// type; the sample count must be positive; the anti-aliasing delay must
    /// not be negative.
    pub fn new(params: SettingsParams) -> Result<Self, SettingsError> {
        let config = SystemConfiguration::get(params.system_type);
        if !config.sample_period_limits().contains(params.sample_period) {
            return Err(SettingsError::SamplePeriodOutOfRange(
                params.sample_period,
                config.sample_period_limits(),
            ));
        }
        if params.sample_count == 0 {
            return Err(SettingsError::ZeroSampleCount);
        }
        if params.anti_aliasing < FineDuration::ZERO {
            return Err(SettingsError::NegativeAntiAliasing(params.anti_aliasing));
        }
        let maximum_frame_rate = max_frame_rate::determine_maximum_frame_rate(
            config,
            params.ping_mode,
            params.sample_count,
            params.sample_start_delay,
            params.sample_period,
            params.anti_aliasing,
            params.interpacket_delay,
        );
        Ok(Self {
            system_type: params.system_type,
            frame_rate: params.frame_rate,
            sample_count: params.sample_count,
            sample_start_delay: params.sample_start_delay,
            sample_period: params.sample_period,
            pulse_width: params.pulse_width,
            ping_mode: params.ping_mode,
            enable_transmit: params.enable_transmit,
            enable_150_volts: params.enable_150_volts,
            frequency: params.frequency,
            receiver_gain: params.receiver_gain,
            focus_position: params.focus_position,
            anti_aliasing: params.anti_aliasing,
            interpacket_delay: params.interpacket_delay,
            salinity: params.salinity,
            maximum_frame_rate,
        })
    }

    /// The documented factory defaults for `system_type`, fully constrained.
    #[must_use]
    pub fn default_for(system_type: SystemType) -> Self {
        let us = FineDuration::from_microseconds;
        let config = SystemConfiguration::get(system_type);
        let params = match system_type {
            SystemType::Aris1800 => SettingsParams {
                system_type,
                frame_rate: Rate::from_hz(15.0),
                sample_count: 1000,
                sample_start_delay: us(1360.0),
                sample_period: us(8.0),
                pulse_width: us(11.0),
                ping_mode: config.default_ping_mode(),
                enable_transmit: true,
                enable_150_volts: true,
                frequency: Frequency::High,
                receiver_gain: 18,
                focus_position: FocusPosition::Distance(Distance::from_meters(4.0)),
                anti_aliasing: FineDuration::ZERO,
                interpacket_delay: InterpacketDelay::OFF,
                salinity: Salinity::Fresh,
            },
            SystemType::Aris3000 => SettingsParams {
                system_type,
                frame_rate: Rate::from_hz(15.0),
                sample_count: 1250,
                sample_start_delay: us(1300.0),
                sample_period: us(5.0),
                pulse_width: us(6.0),
                ping_mode: config.default_ping_mode(),
                enable_transmit: true,
                enable_150_volts: true,
                frequency: Frequency::High,
                receiver_gain: 12,
                focus_position: FocusPosition::Distance(Distance::from_meters(3.3)),
                anti_aliasing: FineDuration::ZERO,
                interpacket_delay: InterpacketDelay::OFF,
                salinity: Salinity::Fresh,
            },
            SystemType::Aris1200 => SettingsParams {
                system_type,
                frame_rate: Rate::from_hz(10.0),
                sample_count: 1000,
                sample_start_delay: us(4000.0),
                sample_period: us(28.0),
                pulse_width: us(24.0),
                ping_mode: config.default_ping_mode(),
                enable_transmit: true,
                enable_150_volts: true,
                frequency: Frequency::High,
                receiver_gain: 20,
                focus_position: FocusPosition::Distance(Distance::from_meters(13.0)),
                anti_aliasing: FineDuration::ZERO,
                interpacket_delay: InterpacketDelay::OFF,
                salinity: Salinity::Fresh,
            },
        };
        constraints::apply_all_constraints(Self::rebuild(params))
    }

    /// Rebuilds a snapshot from fields already validated once.
    ///
    /// # Panics
    ///
    /// Panics if a validated field was altered; that is a defect in the
    /// calling pipeline, not user input.
    pub(crate) fn rebuild(params: SettingsParams) -> Self {
        match Self::new(params) {
            Ok(settings) => settings,
            Err(error) => unreachable!("rebuild altered a validated field: {error}"),
        }
    }

    /// The hardware model this snapshot configures.
    #[must_use]
    pub const fn system_type(&self) -> SystemType {
        self.system_type
    }

    /// The requested frame rate.
    #[must_use]
    pub const fn frame_rate(&self) -> Rate {
        self.frame_rate
    }

    /// The number of range samples per beam.
    #[must_use]
    pub const fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// The delay after transmit before sampling begins.
    #[must_use]
    pub const fn sample_start_delay(&self) -> FineDuration {
        self.sample_start_delay
    }

    /// The time between consecutive samples.
    #[must_use]
    pub const fn sample_period(&self) -> FineDuration {
        self.sample_period
    }

    /// The transmit pulse width.
    #[must_use]
    pub const fn pulse_width(&self) -> FineDuration {
        self.pulse_width
    }

    /// The beam/ping pattern of a frame.
    #[must_use]
    pub const fn ping_mode(&self) -> PingMode {
        self.ping_mode
    }

    /// Whether the transmitter is enabled.
    #[must_use]
    pub const fn enable_transmit(&self) -> bool {
        self.enable_transmit
    }

    /// Whether the 150 V supply is enabled.
    #[must_use]
    pub const fn enable_150_volts(&self) -> bool {
        self.enable_150_volts
    }

    /// The acoustic frequency band.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// The receiver gain.
    #[must_use]
    pub const fn receiver_gain(&self) -> u32 {
        self.receiver_gain
    }

    /// The lens focus position.
    #[must_use]
    pub const fn focus_position(&self) -> FocusPosition {
        self.focus_position
    }

    /// The anti-aliasing delay appended to each cycle.
    #[must_use]
    pub const fn anti_aliasing(&self) -> FineDuration {
        self.anti_aliasing
    }

    /// The interpacket delay settings.
    #[must_use]
    pub const fn interpacket_delay(&self) -> InterpacketDelay {
        self.interpacket_delay
    }

    /// The salinity class the sonar is operating in.
    #[must_use]
    pub const fn salinity(&self) -> Salinity {
        self.salinity
    }

    /// The frame rate ceiling derived from the sample geometry.
    #[must_use]
    pub const fn maximum_frame_rate(&self) -> Rate {
        self.maximum_frame_rate
    }

    /// The fields of this snapshot, for building a modified one.
    #[must_use]
    pub const fn params(&self) -> SettingsParams {
        SettingsParams {
            system_type: self.system_type,
            frame_rate: self.frame_rate,
            sample_count: self.sample_count,
            sample_start_delay: self.sample_start_delay,
            sample_period: self.sample_period,
            pulse_width: self.pulse_width,
            ping_mode: self.ping_mode,
            enable_transmit: self.enable_transmit,
            enable_150_volts: self.enable_150_volts,
            frequency: self.frequency,
            receiver_gain: self.receiver_gain,
            focus_position: self.focus_position,
            anti_aliasing: self.anti_aliasing,
            interpacket_delay: self.interpacket_delay,
            salinity: self.salinity,
        }
    }

    /// The imaging window this snapshot produces under `conditions`.
    #[must_use]
    pub fn window_bounds(&self, conditions: &ObservedConditions) -> WindowBounds {
        let speed_of_sound = conditions.speed_of_sound(self.salinity);
        let start = calculations::window_start(self.sample_start_delay, speed_of_sound);
        let length =
            calculations::window_length(self.sample_count, self.sample_period, speed_of_sound);
        WindowBounds::new_unchecked(start, start + length)
    }

    /// The down-range spacing between samples under `conditions`.
    #[must_use]
    pub fn resolution(&self, conditions: &ObservedConditions) -> Distance {
        self.window_bounds(conditions).window_length() / self.sample_count as f64
    }

    /// Returns a constrained snapshot with the given frame rate.
    #[must_use]
    pub fn with_frame_rate(&self, frame_rate: Rate) -> Self {
        let mut params = self.params();
        params.frame_rate = frame_rate;
        constraints::apply_all_constraints(Self::rebuild(params))
    }

    /// Returns a constrained snapshot with the given sample count, clamped
    /// into the hardware limits.
    #[must_use]
    pub fn with_sample_count(&self, sample_count: u32) -> Self {
        let limits = SystemConfiguration::get(self.system_type).sample_count_device_limits();
        let clamped = limits.clamp(sample_count);
        if clamped != sample_count {
            tracing::warn!(
                "Sample count ({}) is out of range {:?}; clamping",
                sample_count,
                limits
            );
        }
        let mut params = self.params();
        params.sample_count = clamped;
        constraints::apply_all_constraints(Self::rebuild(params))
    }

    /// Returns a constrained snapshot with the given sample period.
    pub fn with_sample_period(&self, sample_period: FineDuration) -> Result<Self, SettingsError> {
        let mut params = self.params();
        params.sample_period = sample_period;
        Ok(constraints::apply_all_constraints(Self::new(params)?))
    }

    /// Returns a constrained snapshot with the given sample start delay,
    /// clamped into the hardware limits.
    #[must_use]
    pub fn with_sample_start_delay(&self, sample_start_delay: FineDuration) -> Self {
        let limits = SystemConfiguration::get(self.system_type).sample_start_delay_limits();
        let clamped = limits.clamp(sample_start_delay);
        if clamped != sample_start_delay {
            tracing::warn!(
                "Sample start delay ({:?}) is out of range {:?}; clamping",
                sample_start_delay,
                limits
            );
        }
        let mut params = self.params();
        params.sample_start_delay = clamped;
        constraints::apply_all_constraints(Self::rebuild(params))
    }

    /// Returns a constrained snapshot with the given pulse width.
    #[must_use]
    pub fn with_pulse_width(&self, pulse_width: FineDuration) -> Self {
        let mut params = self.params();
        params.pulse_width = pulse_width;
        constraints::apply_all_constraints(Self::rebuild(params))
    }

    /// Returns a constrained snapshot with the given ping mode.
    pub fn with_ping_mode(&self, ping_mode: PingMode) -> Result<Self, SettingsError> {
        let config = SystemConfiguration::get(self.system_type);
        if !config.available_ping_modes().contains(&ping_mode) {
            return Err(SettingsError::UnavailablePingMode(ping_mode.wire_code()));
        }
        let mut params = self.params();
        params.ping_mode = ping_mode;
        Ok(constraints::apply_all_constraints(Self::rebuild(params)))
    }

    /// Returns a constrained snapshot with the given frequency band.
    #[must_use]
    pub fn with_frequency(&self, frequency: Frequency) -> Self {
        let mut params = self.params();
        params.frequency = frequency;
        constraints::apply_all_constraints(Self::rebuild(params))
    }

    /// Returns a constrained snapshot with the given receiver gain, clamped
    /// into the hardware limits.
    #[must_use]
    pub fn with_receiver_gain(&self, receiver_gain: u32) -> Self {
        let limits = SystemConfiguration::get(self.system_type).receiver_gain_limits();
        let clamped = limits.clamp(receiver_gain);
        if clamped != receiver_gain {
            tracing::warn!(
                "Receiver gain ({}) is out of range {:?}; clamping",
                receiver_gain,
                limits
            );
        }
        let mut params = self.params();
        params.receiver_gain = clamped;
        constraints::apply_all_constraints(Self::rebuild(params))
    }

    /// Returns a constrained snapshot with the given focus position.
    #[must_use]
    pub fn with_focus_position(&self, focus_position: FocusPosition) -> Self {
        let mut params = self.params();
        params.focus_position = focus_position;
        constraints::apply_all_constraints(Self::rebuild(params))
    }

    /// Returns a constrained snapshot with the given anti-aliasing delay.
    pub fn with_anti_aliasing(&self, anti_aliasing: FineDuration) -> Result<Self, SettingsError> {
        let mut params = self.params();
        params.anti_aliasing = anti_aliasing;
        Ok(constraints::apply_all_constraints(Self::new(params)?))
    }

    /// Returns a constrained snapshot with the given interpacket delay.
    #[must_use]
    pub fn with_interpacket_delay(&self, interpacket_delay: InterpacketDelay) -> Self {
        let mut params = self.params();
        params.interpacket_delay = interpacket_delay;
        constraints::apply_all_constraints(Self::rebuild(params))
    }

    /// Returns a constrained snapshot operating in the given salinity.
    #[must_use]
    pub fn with_salinity(&self, salinity: Salinity) -> Self {
        let mut params = self.params();
        params.salinity = salinity;
        constraints::apply_all_constraints(Self::rebuild(params))
    }

    /// Returns a constrained snapshot with the transmitter enabled or not.
    #[must_use]
    pub fn with_transmit_enabled(&self, enable_transmit: bool) -> Self {
        let mut params = self.params();
        params.enable_transmit = enable_transmit;
        constraints::apply_all_constraints(Self::rebuild(params))
    }

    /// Returns a constrained snapshot with the 150 V supply enabled or not.
    #[must_use]
    pub fn with_150_volts_enabled(&self, enable_150_volts: bool) -> Self {
        let mut params = self.params();
        params.enable_150_volts = enable_150_volts;
        constraints::apply_all_constraints(Self::rebuild(params))
    }
}
