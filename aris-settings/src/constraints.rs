//! Constraint application over candidate settings snapshots.

use aris_core::{units::FineDuration, Range};

use crate::{max_frame_rate, settings::AcousticSettings, system::SystemConfiguration};

/// Clamps a candidate snapshot to everything the hardware and the energy
/// budget allow.
///
/// Performed in order: frame rate into `[hardware minimum, derived ceiling]`;
/// pulse width into the frequency band limits and the transmit energy budget
/// (which divides by the already-clamped frame rate), floored to a whole
/// microsecond; anti-aliasing into the cycle period headroom left by the
/// final geometry. The operation is idempotent, and a snapshot that needs no
/// clamping is returned unchanged.
#[must_use]
pub fn apply_all_constraints(settings: AcousticSettings) -> AcousticSettings {
    let config = SystemConfiguration::get(settings.system_type());

    let frame_rate_limits = Range::new(
        config.frame_rate_limits().minimum(),
        settings.maximum_frame_rate(),
    );
    let frame_rate = frame_rate_limits.clamp(settings.frame_rate());
    if frame_rate != settings.frame_rate() {
        tracing::debug!(
            "Frame rate ({:?}) constrained to {:?} (limits {:?})",
            settings.frame_rate(),
            frame_rate,
            frame_rate_limits
        );
    }

    let band_limits = config.pulse_width_limits(settings.frequency());
    let energy_cap = config.max_cumulative_pulse_per_second() / frame_rate.hz();
    let pulse_width = band_limits
        .clamp(settings.pulse_width())
        .min(energy_cap)
        .floor_to_microsecond();
    if pulse_width != settings.pulse_width() {
        tracing::debug!(
            "Pulse width ({:?}) constrained to {:?} (band limits {:?}, energy cap {:?})",
            settings.pulse_width(),
            pulse_width,
            band_limits,
            energy_cap
        );
    }

    let minimum_cycle = max_frame_rate::minimum_cycle_period(
        config,
        settings.sample_count(),
        settings.sample_start_delay(),
        settings.sample_period(),
    );
    let busy = minimum_cycle
        + max_frame_rate::cycle_period_adjustment(config, minimum_cycle, settings.sample_period());
    let headroom = (config.cycle_period_maximum() - busy).max(FineDuration::ZERO);
    let anti_aliasing = Range::new(FineDuration::ZERO, headroom).clamp(settings.anti_aliasing());
    if anti_aliasing != settings.anti_aliasing() {
        tracing::debug!(
            "Anti-aliasing ({:?}) constrained to {:?} (headroom {:?})",
            settings.anti_aliasing(),
            anti_aliasing,
            headroom
        );
    }

    if frame_rate == settings.frame_rate()
        && pulse_width == settings.pulse_width()
        && anti_aliasing == settings.anti_aliasing()
    {
        return settings;
    }
    let mut params = settings.params();
    params.frame_rate = frame_rate;
    params.pulse_width = pulse_width;
    params.anti_aliasing = anti_aliasing;
    AcousticSettings::rebuild(params)
}
