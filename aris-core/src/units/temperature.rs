use derive_more::{Add, Sub};
use serde::{Deserialize, Serialize};

/// A water temperature in degrees Celsius.
#[derive(Add, Sub, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Temperature {
    degrees_c: f64,
}

impl core::fmt::Debug for Temperature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} °C", self.degrees_c)
    }
}

impl Temperature {
    /// Creates a new [`Temperature`] from degrees Celsius.
    #[must_use]
    pub const fn from_celsius(degrees_c: f64) -> Self {
        Self { degrees_c }
    }

    #[inline]
    /// Returns the temperature in degrees Celsius.
    pub const fn degrees_celsius(&self) -> f64 {
        self.degrees_c
    }
}
