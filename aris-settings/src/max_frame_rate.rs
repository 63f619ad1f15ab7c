//! The hardware-imposed ceiling on frame rate.
//!
//! An empirical timing model of the device: the cycle period (listening time
//! for one ping plus a model-tuned adjustment) times the pings per frame
//! gives the minimum frame period, lengthened by packet pacing when an
//! interpacket delay is active. Constants here and in the per-model
//! configuration are calibration data; copied, not derived.

use aris_core::units::{FineDuration, Rate};

use crate::{
    settings::InterpacketDelay,
    system::{PingMode, SystemConfiguration},
};

/// Sample periods at or below this use the small-period adjustment factor.
const SMALL_PERIOD_THRESHOLD: FineDuration = FineDuration::from_microseconds(4.0);

/// Per-packet pacing headroom when the interpacket delay is active.
const PACKET_HEADROOM: FineDuration = FineDuration::from_microseconds(16.6);

/// Per-frame byte overhead folded into the packet count.
const FRAME_OVERHEAD_BYTES: u32 = 1024;

/// Usable payload bytes per network packet.
const PACKET_PAYLOAD_BYTES: u32 = 1392;

/// The highest frame rate the given sample geometry allows, clamped into the
/// hardware frame rate limits.
#[must_use]
pub fn determine_maximum_frame_rate(
    config: &SystemConfiguration,
    ping_mode: PingMode,
    sample_count: u32,
    sample_start_delay: FineDuration,
    sample_period: FineDuration,
    anti_aliasing: FineDuration,
    interpacket_delay: InterpacketDelay,
) -> Rate {
    let cycle_period = cycle_period(
        config,
        sample_count,
        sample_start_delay,
        sample_period,
        anti_aliasing,
    );

    let pings_per_frame = ping_mode.pings_per_frame();
    let min_frame_period = if interpacket_delay.enabled() {
        let frame_bytes = ping_mode.beam_count() * sample_count + FRAME_OVERHEAD_BYTES;
        let packet_count = frame_bytes.div_ceil(PACKET_PAYLOAD_BYTES);
        cycle_period * pings_per_frame
            + (PACKET_HEADROOM + interpacket_delay.delay()) * packet_count
    } else {
        cycle_period * pings_per_frame
    };

    config
        .frame_rate_limits()
        .clamp(Rate::from_period(min_frame_period))
}

/// The full cycle period of one ping: minimum cycle period plus the
/// model-tuned adjustment and the anti-aliasing delay.
#[must_use]
pub fn cycle_period(
    config: &SystemConfiguration,
    sample_count: u32,
    sample_start_delay: FineDuration,
    sample_period: FineDuration,
    anti_aliasing: FineDuration,
) -> FineDuration {
    let minimum = minimum_cycle_period(config, sample_count, sample_start_delay, sample_period);
    minimum + cycle_period_adjustment(config, minimum, sample_period) + anti_aliasing
}

/// Listening time for one ping plus the fixed timing margin.
pub(crate) fn minimum_cycle_period(
    config: &SystemConfiguration,
    sample_count: u32,
    sample_start_delay: FineDuration,
    sample_period: FineDuration,
) -> FineDuration {
    sample_start_delay + sample_period * sample_count + config.cycle_period_margin()
}

pub(crate) fn cycle_period_adjustment(
    config: &SystemConfiguration,
    minimum_cycle_period: FineDuration,
    sample_period: FineDuration,
) -> FineDuration {
    let factor = if sample_period <= SMALL_PERIOD_THRESHOLD {
        config.small_period_factor()
    } else {
        config.large_period_factor()
    };
    minimum_cycle_period * factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::SystemType;

    // The reference case for the timing model; the exact figures are part of
    // the device compatibility contract.
    #[test]
    fn reference_case() {
        let config = SystemConfiguration::get(SystemType::Aris3000);
        let sample_start_delay = FineDuration::from_microseconds(2626.0);
        let sample_period = FineDuration::from_microseconds(8.0);

        let mcp = minimum_cycle_period(config, 1250, sample_start_delay, sample_period);
        assert_eq!(FineDuration::from_microseconds(13_046.0), mcp);

        let cycle = cycle_period(
            config,
            1250,
            sample_start_delay,
            sample_period,
            FineDuration::ZERO,
        );
        approx::assert_abs_diff_eq!(13_437.0, cycle.total_microseconds(), epsilon = 1.0);

        let rate = determine_maximum_frame_rate(
            config,
            PingMode::Mode9,
            1250,
            sample_start_delay,
            sample_period,
            FineDuration::ZERO,
            InterpacketDelay::OFF,
        );
        approx::assert_relative_eq!(9.30, rate.hz(), max_relative = 0.01);
    }

    #[test]
    fn small_period_uses_small_factor() {
        let config = SystemConfiguration::get(SystemType::Aris3000);
        let mcp = FineDuration::from_microseconds(10_000.0);
        assert_eq!(
            FineDuration::from_microseconds(200.0),
            cycle_period_adjustment(config, mcp, FineDuration::from_microseconds(4.0))
        );
        assert_eq!(
            FineDuration::from_microseconds(300.0),
            cycle_period_adjustment(config, mcp, FineDuration::from_microseconds(5.0))
        );
    }

    #[test]
    fn interpacket_delay_lowers_the_ceiling() {
        let config = SystemConfiguration::get(SystemType::Aris3000);
        let sample_start_delay = FineDuration::from_microseconds(2626.0);
        let sample_period = FineDuration::from_microseconds(8.0);
        let without = determine_maximum_frame_rate(
            config,
            PingMode::Mode9,
            1250,
            sample_start_delay,
            sample_period,
            FineDuration::ZERO,
            InterpacketDelay::OFF,
        );
        let with = determine_maximum_frame_rate(
            config,
            PingMode::Mode9,
            1250,
            sample_start_delay,
            sample_period,
            FineDuration::ZERO,
            InterpacketDelay::new(true, FineDuration::from_microseconds(100.0)),
        );
        assert!(with < without);
    }

    #[test]
    fn clamped_into_hardware_limits() {
        let config = SystemConfiguration::get(SystemType::Aris3000);
        // Tiny geometry would allow hundreds of hertz; the hardware caps it.
        let rate = determine_maximum_frame_rate(
            config,
            PingMode::Mode6,
            200,
            FineDuration::from_microseconds(930.0),
            FineDuration::from_microseconds(4.0),
            FineDuration::ZERO,
            InterpacketDelay::OFF,
        );
        assert_eq!(config.frame_rate_limits().maximum(), rate);
    }
}
