//! Convenience re-exports for users of the settings model.

pub use aris_core::{
    acoustics::{depth_from_pressure, speed_of_sound},
    units::{Distance, FineDuration, Rate, Salinity, Temperature, Velocity},
    Range,
};

pub use crate::{
    adjust::{
        ops::{
            move_window_end, move_window_start, nudge_window_end, nudge_window_start,
            select_specific_range, select_window_preset, slide_window, NudgeDirection,
        },
        AdjustWindowTerminus, AdjustmentFlags, GuidedSettingsMode,
    },
    constraints::apply_all_constraints,
    error::SettingsError,
    settings::{
        AcousticSettings, FocusPosition, Frequency, InterpacketDelay, ObservedConditions,
        SettingsParams, WindowBounds,
    },
    system::{PingMode, SystemConfiguration, SystemType, WindowPreset},
};
