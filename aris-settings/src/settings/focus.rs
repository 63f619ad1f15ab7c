use aris_core::units::Distance;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// The acoustic lens focus, in one of its two device representations.
///
/// A focus position is either an explicit range to the focal point or a raw
/// focus motor position. The two representations never coexist; external
/// sources that carry both fields are rejected at [`FocusPosition::try_new`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum FocusPosition {
    /// Distance to the focal point.
    Distance(Distance),
    /// Raw focus motor units.
    MotorUnits(u16),
}

impl FocusPosition {
    /// Builds a focus position from the two optional device fields.
    ///
    /// Exactly one of the fields must be present.
    pub fn try_new(
        distance: Option<Distance>,
        motor_units: Option<u16>,
    ) -> Result<Self, SettingsError> {
        match (distance, motor_units) {
            (Some(distance), None) => Ok(FocusPosition::Distance(distance)),
            (None, Some(motor_units)) => Ok(FocusPosition::MotorUnits(motor_units)),
            _ => Err(SettingsError::AmbiguousFocusPosition),
        }
    }

    /// The explicit focus distance, if this position carries one.
    #[must_use]
    pub const fn distance(&self) -> Option<Distance> {
        match *self {
            FocusPosition::Distance(distance) => Some(distance),
            FocusPosition::MotorUnits(_) => None,
        }
    }

    /// The raw motor units, if this position carries them.
    #[must_use]
    pub const fn motor_units(&self) -> Option<u16> {
        match *self {
            FocusPosition::Distance(_) => None,
            FocusPosition::MotorUnits(motor_units) => Some(motor_units),
        }
    }
}
