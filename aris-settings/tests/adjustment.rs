//! End-to-end properties of the window-adjustment pipeline.

use approx::assert_abs_diff_eq;
use aris_settings::prelude::*;
use rand::Rng;

const MODES: [GuidedSettingsMode; 3] = [
    GuidedSettingsMode::FixedSampleCount,
    GuidedSettingsMode::GuidedSampleCount,
    GuidedSettingsMode::SamplePeriodLevel2,
];

fn conditions() -> ObservedConditions {
    ObservedConditions::new(Temperature::from_celsius(15.0), Distance::from_meters(0.0))
}

#[test]
fn sub_threshold_moves_change_nothing() {
    let conditions = conditions();
    let nudge = Distance::from_meters(0.002);
    for system_type in SystemType::ALL {
        let settings = AcousticSettings::default_for(system_type);
        let bounds = settings.window_bounds(&conditions);
        for mode in MODES {
            let moved = move_window_start(
                mode,
                &settings,
                &conditions,
                bounds.window_start() + nudge,
                AdjustmentFlags::default(),
            )
            .unwrap();
            assert_eq!(settings, moved, "{system_type:?}/{mode:?} start");

            let moved = move_window_end(
                mode,
                &settings,
                &conditions,
                bounds.window_end() - nudge,
                AdjustmentFlags::default(),
            )
            .unwrap();
            assert_eq!(settings, moved, "{system_type:?}/{mode:?} end");

            let slid = slide_window(
                mode,
                &settings,
                &conditions,
                bounds.window_start() + nudge,
                AdjustmentFlags::default(),
            )
            .unwrap();
            assert_eq!(settings, slid, "{system_type:?}/{mode:?} slide");
        }
    }
}

#[test]
fn selected_window_round_trips_within_quantization() {
    let conditions = conditions();
    let settings = AcousticSettings::default_for(SystemType::Aris3000);
    let requested = WindowBounds::new(Distance::from_meters(1.5), Distance::from_meters(6.0))
        .unwrap();

    for mode in [
        GuidedSettingsMode::GuidedSampleCount,
        GuidedSettingsMode::SamplePeriodLevel2,
    ] {
        let adjusted = select_specific_range(
            mode,
            &settings,
            &conditions,
            requested,
            AdjustmentFlags::default(),
        )
        .unwrap();
        let bounds = adjusted.window_bounds(&conditions);
        // One sample period of listening time, as distance.
        let quantum = conditions.speed_of_sound(adjusted.salinity())
            * adjusted.sample_period()
            / 2.0;
        assert_abs_diff_eq!(
            requested.window_start().meters(),
            bounds.window_start().meters(),
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            requested.window_end().meters(),
            bounds.window_end().meters(),
            epsilon = quantum.meters()
        );
    }
}

#[test]
fn fixed_policy_never_changes_sample_count() {
    let conditions = conditions();
    let mut rng = rand::rng();
    for system_type in SystemType::ALL {
        let mut settings = AcousticSettings::default_for(system_type);
        let expected = settings.sample_count();
        for _ in 0..100 {
            let edge = Distance::from_meters(rng.random_range(0.1..60.0));
            settings = match rng.random_range(0..4) {
                0 => move_window_start(
                    GuidedSettingsMode::FixedSampleCount,
                    &settings,
                    &conditions,
                    edge,
                    AdjustmentFlags::default(),
                ),
                1 => move_window_end(
                    GuidedSettingsMode::FixedSampleCount,
                    &settings,
                    &conditions,
                    edge,
                    AdjustmentFlags::default(),
                ),
                2 => slide_window(
                    GuidedSettingsMode::FixedSampleCount,
                    &settings,
                    &conditions,
                    edge,
                    AdjustmentFlags::default(),
                ),
                _ => {
                    let end = edge + Distance::from_meters(rng.random_range(0.5..20.0));
                    select_specific_range(
                        GuidedSettingsMode::FixedSampleCount,
                        &settings,
                        &conditions,
                        WindowBounds::new(edge, end).unwrap(),
                        AdjustmentFlags::default(),
                    )
                }
            }
            .unwrap();
            assert_eq!(expected, settings.sample_count());
        }
    }
}

#[test]
fn guided_sample_count_stays_preferred() {
    let conditions = conditions();
    let mut rng = rand::rng();
    for system_type in SystemType::ALL {
        let preferred = SystemConfiguration::get(system_type).sample_count_preferred_limits();
        let mut settings = AcousticSettings::default_for(system_type);
        for _ in 0..100 {
            let edge = Distance::from_meters(rng.random_range(0.1..60.0));
            let use_auto = rng.random();
            let flags = AdjustmentFlags {
                use_max_frame_rate: rng.random(),
                use_auto_frequency: use_auto,
            };
            settings = if rng.random() {
                move_window_end(
                    GuidedSettingsMode::GuidedSampleCount,
                    &settings,
                    &conditions,
                    edge,
                    flags,
                )
            } else {
                move_window_start(
                    GuidedSettingsMode::GuidedSampleCount,
                    &settings,
                    &conditions,
                    edge,
                    flags,
                )
            }
            .unwrap();
            assert!(
                preferred.contains(settings.sample_count()),
                "{system_type:?}: {} outside {:?}",
                settings.sample_count(),
                preferred
            );
        }
    }
}

#[test]
fn adjusted_snapshots_are_fully_constrained() {
    let conditions = conditions();
    let mut rng = rand::rng();
    for system_type in SystemType::ALL {
        for mode in MODES {
            let mut settings = AcousticSettings::default_for(system_type);
            for _ in 0..50 {
                let edge = Distance::from_meters(rng.random_range(0.1..60.0));
                settings = move_window_end(
                    mode,
                    &settings,
                    &conditions,
                    edge,
                    AdjustmentFlags {
                        use_max_frame_rate: true,
                        use_auto_frequency: true,
                    },
                )
                .unwrap();
                // Idempotence: nothing left to clamp.
                assert_eq!(settings, apply_all_constraints(settings));
                assert!(settings.frame_rate() <= settings.maximum_frame_rate());
            }
        }
    }
}

#[test]
fn focus_follows_the_window_midpoint() {
    let conditions = conditions();
    let settings = AcousticSettings::default_for(SystemType::Aris1800);
    let adjusted = move_window_end(
        GuidedSettingsMode::GuidedSampleCount,
        &settings,
        &conditions,
        Distance::from_meters(20.0),
        AdjustmentFlags::default(),
    )
    .unwrap();
    let bounds = adjusted.window_bounds(&conditions);
    let focus = adjusted.focus_position().distance().unwrap();
    assert_abs_diff_eq!(bounds.midpoint().meters(), focus.meters(), epsilon = 1e-9);
}

#[test]
fn auto_frequency_switches_across_the_crossover() {
    let conditions = conditions();
    let settings = AcousticSettings::default_for(SystemType::Aris3000);
    let flags = AdjustmentFlags {
        use_max_frame_rate: false,
        use_auto_frequency: true,
    };

    let near = move_window_end(
        GuidedSettingsMode::GuidedSampleCount,
        &settings,
        &conditions,
        Distance::from_meters(3.0),
        flags,
    )
    .unwrap();
    assert_eq!(Frequency::High, near.frequency());

    let far = move_window_end(
        GuidedSettingsMode::GuidedSampleCount,
        &near,
        &conditions,
        Distance::from_meters(18.0),
        flags,
    )
    .unwrap();
    assert_eq!(Frequency::Low, far.frequency());
}
