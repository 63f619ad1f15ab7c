use aris_core::{
    units::{Distance, FineDuration},
    Range,
};

use super::{AdjustContext, SampleGeometryPolicy};
use crate::{auto, calculations};

/// Chooses the sample count from the model's preferred range so the system
/// picks a sensible resolution for normal interactive use.
#[derive(Clone, Copy, Debug, Default)]
pub struct Guided;

impl SampleGeometryPolicy for Guided {
    fn sample_count_limits(&self, cx: &AdjustContext<'_>) -> Range<u32> {
        cx.config.sample_count_preferred_limits()
    }

    fn sample_geometry(
        &self,
        cx: &AdjustContext<'_>,
        requested_length: Distance,
        window_end: Distance,
    ) -> (FineDuration, u32) {
        let config = cx.config;
        let preferred = config.sample_count_preferred_limits();
        let mut sample_period =
            auto::auto_sample_period(config, window_end, cx.conditions.water_temp());
        let sample_count = preferred.clamp(calculations::fit_sample_count_to(
            requested_length,
            sample_period,
            cx.speed_of_sound,
        ));
        // The tabulated period never wins over the requested window size:
        // pinned at the minimum count, shrink the period until the window
        // fits or the hardware floor is reached.
        if sample_count == preferred.minimum() {
            let floor = config.sample_period_limits().minimum();
            while sample_period > floor
                && calculations::window_length(sample_count, sample_period, cx.speed_of_sound)
                    > requested_length
            {
                sample_period = sample_period - FineDuration::ONE_MICROSECOND;
            }
        }
        (sample_period, sample_count)
    }
}

#[cfg(test)]
mod tests {
    use aris_core::units::Temperature;

    use super::*;
    use crate::{
        adjust::{AdjustWindowTerminus, AdjustmentFlags},
        calculations,
        settings::{AcousticSettings, ObservedConditions, WindowBounds},
        system::{SystemConfiguration, SystemType},
    };

    fn conditions() -> ObservedConditions {
        ObservedConditions::new(Temperature::from_celsius(15.0), Distance::from_meters(0.0))
    }

    #[test]
    fn sample_count_stays_in_the_preferred_range() {
        let settings = AcousticSettings::default_for(SystemType::Aris3000);
        let conditions = conditions();
        let preferred = SystemConfiguration::get(SystemType::Aris3000)
            .sample_count_preferred_limits();
        for end in [2.0_f64, 5.0, 8.0, 12.0, 16.0, 20.0] {
            let adjusted = Guided
                .move_window_end(
                    &settings,
                    &conditions,
                    Distance::from_meters(end),
                    AdjustmentFlags::default(),
                )
                .unwrap();
            assert!(
                preferred.contains(adjusted.sample_count()),
                "sample count {} outside {:?} for end {end}",
                adjusted.sample_count(),
                preferred
            );
        }
    }

    // A short window pins the count at the preferred minimum; the naive
    // tabulated period would then force a larger window than requested, so
    // the period shrinks to the hardware floor instead.
    #[test]
    fn short_window_shrinks_the_period() {
        let settings = AcousticSettings::default_for(SystemType::Aris3000);
        let conditions = conditions();
        let requested = WindowBounds::new(
            Distance::from_meters(1.0),
            Distance::from_meters(2.0),
        )
        .unwrap();
        let adjusted = Guided
            .select_specific_range(&settings, &conditions, requested, AdjustmentFlags::default())
            .unwrap();

        let config = SystemConfiguration::get(SystemType::Aris3000);
        let preferred = config.sample_count_preferred_limits();
        assert_eq!(preferred.minimum(), adjusted.sample_count());
        // The tabulated period here would be 5 µs, a 2.9 m window; shrinking
        // reaches the smallest window the preferred minimum count can
        // express.
        assert_eq!(
            config.sample_period_limits().minimum(),
            adjusted.sample_period()
        );
        let floor_length = calculations::window_length(
            preferred.minimum(),
            config.sample_period_limits().minimum(),
            conditions.speed_of_sound(adjusted.salinity()),
        );
        approx::assert_abs_diff_eq!(
            floor_length.meters(),
            adjusted.window_bounds(&conditions).window_length().meters(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn guided_picks_the_tabulated_period_for_long_windows() {
        let settings = AcousticSettings::default_for(SystemType::Aris3000);
        let conditions = conditions();
        let adjusted = Guided
            .move_window_end(
                &settings,
                &conditions,
                Distance::from_meters(15.0),
                AdjustmentFlags::default(),
            )
            .unwrap();
        let expected = auto::auto_sample_period(
            SystemConfiguration::get(SystemType::Aris3000),
            adjusted.window_bounds(&conditions).window_end(),
            conditions.water_temp(),
        );
        // The far edge the pipeline derived from differs from the final
        // quantized edge by less than a meter; the table is flat enough that
        // the period agrees.
        approx::assert_abs_diff_eq!(
            expected.total_microseconds(),
            adjusted.sample_period().total_microseconds(),
            epsilon = 1.0
        );
    }
}
