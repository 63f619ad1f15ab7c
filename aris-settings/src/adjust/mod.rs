//! Window-adjustment policies.
//!
//! Three interchangeable policies move or select the imaging window; they
//! differ only in how sample count and sample period are spent on the
//! requested window (see the table on [`GuidedSettingsMode`]). All of them
//! share the same pipeline: constrain the requested edge, ignore
//! sub-threshold displacements, choose the sample geometry, back-solve the
//! sample start delay so the stationary edge does not drift, derive the
//! automatic values, and apply every hardware constraint.

mod fixed;
mod guided;
mod level2;
pub mod ops;

pub use fixed::Fixed;
pub use guided::Guided;
pub use level2::Level2;

use aris_core::{
    units::{Distance, FineDuration, Velocity},
    Range,
};
use serde::{Deserialize, Serialize};

use crate::{
    auto, calculations, constraints,
    error::SettingsError,
    settings::{AcousticSettings, FocusPosition, ObservedConditions, WindowBounds},
    system::SystemConfiguration,
};

/// Requests that move a window edge by no more than this distance leave the
/// settings untouched, so jittery input cannot churn the device.
pub const MINIMUM_SLIDE_DISPLACEMENT: Distance = Distance::from_meters(0.003);

/// Options applied at the end of every adjustment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdjustmentFlags {
    /// Adopt the derived maximum frame rate.
    pub use_max_frame_rate: bool,
    /// Re-derive the frequency band from the new window end.
    pub use_auto_frequency: bool,
}

/// The window-adjustment policy in effect.
///
/// The mode is chosen per session and never transitions on its own.
///
/// | Mode | Sample count | Use case |
/// |---|---|---|
/// | [`FixedSampleCount`](Self::FixedSampleCount) | held constant | recording in progress |
/// | [`GuidedSampleCount`](Self::GuidedSampleCount) | preferred range per model | normal interactive use |
/// | [`SamplePeriodLevel2`](Self::SamplePeriodLevel2) | device limits, period held | advanced manual control |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuidedSettingsMode {
    /// No policy; every operation fails.
    Invalid,
    FixedSampleCount,
    GuidedSampleCount,
    SamplePeriodLevel2,
}

impl GuidedSettingsMode {
    /// The policy implementing this mode.
    pub fn terminus(self) -> Result<&'static dyn AdjustWindowTerminus, SettingsError> {
        match self {
            GuidedSettingsMode::Invalid => Err(SettingsError::InvalidGuidedSettingsMode),
            GuidedSettingsMode::FixedSampleCount => Ok(&Fixed),
            GuidedSettingsMode::GuidedSampleCount => Ok(&Guided),
            GuidedSettingsMode::SamplePeriodLevel2 => Ok(&Level2),
        }
    }
}

/// One window-adjustment policy.
///
/// Each operation takes the current snapshot plus observed conditions and
/// returns a new, fully constrained snapshot — or the input unchanged when
/// the requested movement is within [`MINIMUM_SLIDE_DISPLACEMENT`].
pub trait AdjustWindowTerminus {
    /// Moves the near edge of the window, keeping the far edge pinned.
    fn move_window_start(
        &self,
        settings: &AcousticSettings,
        conditions: &ObservedConditions,
        requested_start: Distance,
        flags: AdjustmentFlags,
    ) -> Result<AcousticSettings, SettingsError>;

    /// Moves the far edge of the window, keeping the near edge pinned.
    fn move_window_end(
        &self,
        settings: &AcousticSettings,
        conditions: &ObservedConditions,
        requested_end: Distance,
        flags: AdjustmentFlags,
    ) -> Result<AcousticSettings, SettingsError>;

    /// Selects an arbitrary requested window.
    fn select_specific_range(
        &self,
        settings: &AcousticSettings,
        conditions: &ObservedConditions,
        requested: WindowBounds,
        flags: AdjustmentFlags,
    ) -> Result<AcousticSettings, SettingsError>;

    /// Shifts the window without changing its length.
    fn slide_window(
        &self,
        settings: &AcousticSettings,
        conditions: &ObservedConditions,
        requested_start: Distance,
        flags: AdjustmentFlags,
    ) -> Result<AcousticSettings, SettingsError>;
}

/// How a policy spends sample count and sample period on a requested window.
pub(crate) trait SampleGeometryPolicy {
    /// The sample-count limits the policy honors.
    fn sample_count_limits(&self, cx: &AdjustContext<'_>) -> Range<u32>;

    /// The (sample period, sample count) for the requested window length.
    fn sample_geometry(
        &self,
        cx: &AdjustContext<'_>,
        requested_length: Distance,
        window_end: Distance,
    ) -> (FineDuration, u32);

    /// Invariant check once the pipeline has completed.
    fn post_check(&self, original: &AcousticSettings, result: &AcousticSettings) {
        let _ = (original, result);
    }
}

pub(crate) struct AdjustContext<'a> {
    pub config: &'static SystemConfiguration,
    pub settings: &'a AcousticSettings,
    pub conditions: &'a ObservedConditions,
    pub speed_of_sound: Velocity,
    pub bounds: WindowBounds,
}

impl<'a> AdjustContext<'a> {
    fn new(settings: &'a AcousticSettings, conditions: &'a ObservedConditions) -> Self {
        Self {
            config: SystemConfiguration::get(settings.system_type()),
            settings,
            conditions,
            speed_of_sound: conditions.speed_of_sound(settings.salinity()),
            bounds: settings.window_bounds(conditions),
        }
    }

    fn minimum_window_length<P: SampleGeometryPolicy + ?Sized>(&self, policy: &P) -> Distance {
        calculations::minimum_window_length(
            self.config,
            self.conditions,
            self.settings.salinity(),
            &policy.sample_count_limits(self),
        )
    }
}

enum PinnedEdge {
    Start(Distance),
    End(Distance),
}

fn constrain_edge(label: &str, requested: Distance, valid: &Range<Distance>) -> Distance {
    let constrained = valid.clamp(requested);
    if constrained != requested {
        tracing::debug!(
            "Requested {} ({:?}) constrained to {:?} (valid {:?})",
            label,
            requested,
            constrained,
            valid
        );
    }
    constrained
}

impl<T: SampleGeometryPolicy> AdjustWindowTerminus for T {
    #[tracing::instrument(level = "debug", skip(self, settings, conditions))]
    fn move_window_start(
        &self,
        settings: &AcousticSettings,
        conditions: &ObservedConditions,
        requested_start: Distance,
        flags: AdjustmentFlags,
    ) -> Result<AcousticSettings, SettingsError> {
        if requested_start <= Distance::ZERO {
            return Err(SettingsError::WindowEdgeNotPositive(requested_start));
        }
        let cx = AdjustContext::new(settings, conditions);
        let minimum_length = cx.minimum_window_length(self);
        let start_limits = cx.config.window_start_limits();
        let farthest = start_limits.clamp(cx.bounds.window_end() - minimum_length);
        let valid = Range::new(start_limits.minimum(), farthest);
        let new_start = constrain_edge("window start", requested_start, &valid);
        if (new_start - cx.bounds.window_start()).abs() <= MINIMUM_SLIDE_DISPLACEMENT {
            return Ok(*settings);
        }

        let window_end = cx.bounds.window_end();
        let (sample_period, sample_count) =
            self.sample_geometry(&cx, window_end - new_start, window_end);
        finish(
            self,
            &cx,
            PinnedEdge::End(window_end),
            sample_period,
            sample_count,
            flags,
        )
    }

    #[tracing::instrument(level = "debug", skip(self, settings, conditions))]
    fn move_window_end(
        &self,
        settings: &AcousticSettings,
        conditions: &ObservedConditions,
        requested_end: Distance,
        flags: AdjustmentFlags,
    ) -> Result<AcousticSettings, SettingsError> {
        if requested_end <= Distance::ZERO {
            return Err(SettingsError::WindowEdgeNotPositive(requested_end));
        }
        let cx = AdjustContext::new(settings, conditions);
        let minimum_length = cx.minimum_window_length(self);
        let end_limits = cx.config.window_end_limits();
        let nearest = end_limits.clamp(cx.bounds.window_start() + minimum_length);
        let valid = Range::new(nearest, end_limits.maximum());
        let new_end = constrain_edge("window end", requested_end, &valid);
        if (new_end - cx.bounds.window_end()).abs() <= MINIMUM_SLIDE_DISPLACEMENT {
            return Ok(*settings);
        }

        let window_start = cx.bounds.window_start();
        let (sample_period, sample_count) =
            self.sample_geometry(&cx, new_end - window_start, new_end);
        finish(
            self,
            &cx,
            PinnedEdge::Start(window_start),
            sample_period,
            sample_count,
            flags,
        )
    }

    #[tracing::instrument(level = "debug", skip(self, settings, conditions))]
    fn select_specific_range(
        &self,
        settings: &AcousticSettings,
        conditions: &ObservedConditions,
        requested: WindowBounds,
        flags: AdjustmentFlags,
    ) -> Result<AcousticSettings, SettingsError> {
        let cx = AdjustContext::new(settings, conditions);
        let minimum_length = cx.minimum_window_length(self);
        let start_limits = cx.config.window_start_limits();
        let new_start = constrain_edge("window start", requested.window_start(), &start_limits);
        let end_limits = cx.config.window_end_limits();
        let nearest = end_limits.clamp(new_start + minimum_length);
        let valid_end = Range::new(nearest, end_limits.maximum());
        let new_end = constrain_edge("window end", requested.window_end(), &valid_end);
        if (new_start - cx.bounds.window_start()).abs() <= MINIMUM_SLIDE_DISPLACEMENT
            && (new_end - cx.bounds.window_end()).abs() <= MINIMUM_SLIDE_DISPLACEMENT
        {
            return Ok(*settings);
        }

        let (sample_period, sample_count) =
            self.sample_geometry(&cx, new_end - new_start, new_end);
        finish(
            self,
            &cx,
            PinnedEdge::Start(new_start),
            sample_period,
            sample_count,
            flags,
        )
    }

    #[tracing::instrument(level = "debug", skip(self, settings, conditions))]
    fn slide_window(
        &self,
        settings: &AcousticSettings,
        conditions: &ObservedConditions,
        requested_start: Distance,
        flags: AdjustmentFlags,
    ) -> Result<AcousticSettings, SettingsError> {
        if requested_start <= Distance::ZERO {
            return Err(SettingsError::WindowEdgeNotPositive(requested_start));
        }
        let cx = AdjustContext::new(settings, conditions);
        let start_limits = cx.config.window_start_limits();
        let farthest = start_limits
            .clamp(cx.config.window_end_limits().maximum() - cx.bounds.window_length());
        let valid = Range::new(start_limits.minimum(), farthest);
        let new_start = constrain_edge("window start", requested_start, &valid);
        if (new_start - cx.bounds.window_start()).abs() <= MINIMUM_SLIDE_DISPLACEMENT {
            return Ok(*settings);
        }

        finish(
            self,
            &cx,
            PinnedEdge::Start(new_start),
            settings.sample_period(),
            settings.sample_count(),
            flags,
        )
    }
}

/// The shared tail of every adjustment: pin the stationary edge, derive the
/// automatic values, and constrain.
fn finish<T: SampleGeometryPolicy + ?Sized>(
    policy: &T,
    cx: &AdjustContext<'_>,
    pinned: PinnedEdge,
    sample_period: FineDuration,
    sample_count: u32,
    flags: AdjustmentFlags,
) -> Result<AcousticSettings, SettingsError> {
    let config = cx.config;

    let raw_delay = match pinned {
        PinnedEdge::Start(start) => calculations::sample_start_delay(start, cx.speed_of_sound),
        PinnedEdge::End(end) => calculations::sample_start_delay_for_end(
            end,
            sample_count,
            sample_period,
            cx.speed_of_sound,
        ),
    };
    let sample_start_delay = config.sample_start_delay_limits().clamp(raw_delay);
    if sample_start_delay != raw_delay {
        tracing::debug!(
            "Sample start delay ({:?}) constrained to {:?} (limits {:?})",
            raw_delay,
            sample_start_delay,
            config.sample_start_delay_limits()
        );
    }

    let new_start = calculations::window_start(sample_start_delay, cx.speed_of_sound);
    let new_end =
        new_start + calculations::window_length(sample_count, sample_period, cx.speed_of_sound);

    let mut params = cx.settings.params();
    params.sample_period = sample_period;
    params.sample_count = sample_count;
    params.sample_start_delay = sample_start_delay;
    params.focus_position = FocusPosition::Distance((new_start + new_end) / 2.0);
    if flags.use_auto_frequency {
        params.frequency =
            auto::best_frequency(config, params.salinity, cx.conditions.water_temp(), new_end);
    }
    // Pulse width follows frequency, so it is derived after it.
    params.pulse_width = auto::auto_pulse_width(config, params.frequency, new_end);

    let built = AcousticSettings::new(params)?;
    let built = if flags.use_max_frame_rate {
        built.with_frame_rate(built.maximum_frame_rate())
    } else {
        built
    };
    let result = constraints::apply_all_constraints(built);
    policy.post_check(cx.settings, &result);
    Ok(result)
}
