use aris_core::{
    acoustics,
    units::{Distance, Salinity, Temperature, Velocity},
};
use serde::{Deserialize, Serialize};

/// Live environmental observations.
///
/// Combined with the salinity carried on the settings snapshot to derive the
/// speed of sound, which every distance/time conversion depends on.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObservedConditions {
    water_temp: Temperature,
    depth: Distance,
}

impl ObservedConditions {
    /// Creates a new [`ObservedConditions`].
    #[must_use]
    pub const fn new(water_temp: Temperature, depth: Distance) -> Self {
        Self { water_temp, depth }
    }

    /// The observed water temperature.
    #[must_use]
    pub const fn water_temp(&self) -> Temperature {
        self.water_temp
    }

    /// The observed depth.
    #[must_use]
    pub const fn depth(&self) -> Distance {
        self.depth
    }

    /// The speed of sound under these conditions.
    #[must_use]
    pub fn speed_of_sound(&self, salinity: Salinity) -> Velocity {
        acoustics::speed_of_sound(self.water_temp, self.depth, salinity.ppt())
    }
}
