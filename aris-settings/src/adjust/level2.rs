use aris_core::{
    units::{Distance, FineDuration},
    Range,
};

use super::{AdjustContext, SampleGeometryPolicy};
use crate::calculations;

/// Holds the sample period where the user set it and spends sample count,
/// within the full device limits, to cover the window.
///
/// Advanced manual control: resolution stays exactly what the operator
/// chose.
#[derive(Clone, Copy, Debug, Default)]
pub struct Level2;

impl SampleGeometryPolicy for Level2 {
    fn sample_count_limits(&self, cx: &AdjustContext<'_>) -> Range<u32> {
        cx.config.sample_count_device_limits()
    }

    fn sample_geometry(
        &self,
        cx: &AdjustContext<'_>,
        requested_length: Distance,
        _window_end: Distance,
    ) -> (FineDuration, u32) {
        let sample_period = cx.settings.sample_period();
        let sample_count = cx.config.sample_count_device_limits().clamp(
            calculations::fit_sample_count_to(requested_length, sample_period, cx.speed_of_sound),
        );
        (sample_period, sample_count)
    }
}
