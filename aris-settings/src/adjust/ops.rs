//! The range-operation façade: public entry points that dispatch to the
//! adjustment policy selected by [`GuidedSettingsMode`].

use aris_core::units::Distance;
use serde::{Deserialize, Serialize};

use super::{AdjustmentFlags, GuidedSettingsMode};
use crate::{
    error::SettingsError,
    settings::{AcousticSettings, ObservedConditions, WindowBounds},
    system::{SystemConfiguration, WindowPreset},
};

/// Moves the near edge of the imaging window.
pub fn move_window_start(
    mode: GuidedSettingsMode,
    settings: &AcousticSettings,
    conditions: &ObservedConditions,
    requested_start: Distance,
    flags: AdjustmentFlags,
) -> Result<AcousticSettings, SettingsError> {
    mode.terminus()?
        .move_window_start(settings, conditions, requested_start, flags)
}

/// Moves the far edge of the imaging window.
pub fn move_window_end(
    mode: GuidedSettingsMode,
    settings: &AcousticSettings,
    conditions: &ObservedConditions,
    requested_end: Distance,
    flags: AdjustmentFlags,
) -> Result<AcousticSettings, SettingsError> {
    mode.terminus()?
        .move_window_end(settings, conditions, requested_end, flags)
}

/// Selects a specific imaging window.
pub fn select_specific_range(
    mode: GuidedSettingsMode,
    settings: &AcousticSettings,
    conditions: &ObservedConditions,
    requested: WindowBounds,
    flags: AdjustmentFlags,
) -> Result<AcousticSettings, SettingsError> {
    mode.terminus()?
        .select_specific_range(settings, conditions, requested, flags)
}

/// Shifts the imaging window without changing its length.
pub fn slide_window(
    mode: GuidedSettingsMode,
    settings: &AcousticSettings,
    conditions: &ObservedConditions,
    requested_start: Distance,
    flags: AdjustmentFlags,
) -> Result<AcousticSettings, SettingsError> {
    mode.terminus()?
        .slide_window(settings, conditions, requested_start, flags)
}

/// Selects one of the model's fixed imaging windows.
pub fn select_window_preset(
    mode: GuidedSettingsMode,
    settings: &AcousticSettings,
    conditions: &ObservedConditions,
    preset: WindowPreset,
    flags: AdjustmentFlags,
) -> Result<AcousticSettings, SettingsError> {
    let (start, end) = SystemConfiguration::get(settings.system_type()).window_preset(preset);
    let requested = WindowBounds::new(start, end)?;
    select_specific_range(mode, settings, conditions, requested, flags)
}

/// The direction of a step-wise window nudge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NudgeDirection {
    /// One step toward the sonar.
    Closer,
    /// One step away from the sonar.
    Farther,
}

/// Nudges the near edge of the window one configured step.
pub fn nudge_window_start(
    mode: GuidedSettingsMode,
    settings: &AcousticSettings,
    conditions: &ObservedConditions,
    direction: NudgeDirection,
    flags: AdjustmentFlags,
) -> Result<AcousticSettings, SettingsError> {
    let config = SystemConfiguration::get(settings.system_type());
    let current = settings.window_bounds(conditions).window_start();
    let target = match direction {
        NudgeDirection::Closer => current - config.nudge_step(),
        NudgeDirection::Farther => current + config.nudge_step(),
    };
    let target = target.max(config.window_start_limits().minimum());
    move_window_start(mode, settings, conditions, target, flags)
}

/// Nudges the far edge of the window one configured step.
pub fn nudge_window_end(
    mode: GuidedSettingsMode,
    settings: &AcousticSettings,
    conditions: &ObservedConditions,
    direction: NudgeDirection,
    flags: AdjustmentFlags,
) -> Result<AcousticSettings, SettingsError> {
    let config = SystemConfiguration::get(settings.system_type());
    let current = settings.window_bounds(conditions).window_end();
    let target = match direction {
        NudgeDirection::Closer => current - config.nudge_step(),
        NudgeDirection::Farther => current + config.nudge_step(),
    };
    let target = target.max(config.window_end_limits().minimum());
    move_window_end(mode, settings, conditions, target, flags)
}
