use aris_core::{
    units::{Distance, FineDuration},
    Range,
};

use super::{AdjustContext, SampleGeometryPolicy};
use crate::{calculations, settings::AcousticSettings};

/// Holds the sample count constant; only the sample period and start delay
/// adjust.
///
/// Used while a recording is in progress, where frame geometry must not
/// change mid-file. Sample-count invariance is asserted after every
/// operation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fixed;

impl SampleGeometryPolicy for Fixed {
    fn sample_count_limits(&self, cx: &AdjustContext<'_>) -> Range<u32> {
        let sample_count = cx.settings.sample_count();
        Range::new(sample_count, sample_count)
    }

    fn sample_geometry(
        &self,
        cx: &AdjustContext<'_>,
        requested_length: Distance,
        _window_end: Distance,
    ) -> (FineDuration, u32) {
        let sample_count = cx.settings.sample_count();
        let sample_period = cx.config.sample_period_limits().clamp(
            calculations::fit_sample_period_to(requested_length, sample_count, cx.speed_of_sound),
        );
        (sample_period, sample_count)
    }

    fn post_check(&self, original: &AcousticSettings, result: &AcousticSettings) {
        assert_eq!(
            original.sample_count(),
            result.sample_count(),
            "sample count changed under the fixed sample count policy"
        );
    }
}

#[cfg(test)]
mod tests {
    use aris_core::units::Temperature;

    use super::*;
    use crate::{
        adjust::{AdjustWindowTerminus, AdjustmentFlags},
        settings::ObservedConditions,
        system::SystemType,
    };

    fn conditions() -> ObservedConditions {
        ObservedConditions::new(Temperature::from_celsius(15.0), Distance::from_meters(0.0))
    }

    #[test]
    fn sample_count_survives_every_operation() {
        let settings = AcousticSettings::default_for(SystemType::Aris1800);
        let conditions = conditions();
        let flags = AdjustmentFlags::default();
        let original_count = settings.sample_count();

        let moved = Fixed
            .move_window_start(&settings, &conditions, Distance::from_meters(2.5), flags)
            .unwrap();
        assert_eq!(original_count, moved.sample_count());

        let moved = Fixed
            .move_window_end(&moved, &conditions, Distance::from_meters(20.0), flags)
            .unwrap();
        assert_eq!(original_count, moved.sample_count());

        let slid = Fixed
            .slide_window(&moved, &conditions, Distance::from_meters(4.0), flags)
            .unwrap();
        assert_eq!(original_count, slid.sample_count());
    }

    #[test]
    fn period_absorbs_the_window_change() {
        let settings = AcousticSettings::default_for(SystemType::Aris1800);
        let conditions = conditions();
        let before = settings.window_bounds(&conditions);
        let widened = Fixed
            .move_window_end(
                &settings,
                &conditions,
                before.window_end() + Distance::from_meters(10.0),
                AdjustmentFlags::default(),
            )
            .unwrap();
        assert!(widened.sample_period() > settings.sample_period());
        assert_eq!(settings.sample_count(), widened.sample_count());
    }
}
