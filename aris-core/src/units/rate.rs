use derive_more::{Add, Sub};
use serde::{Deserialize, Serialize};

use super::FineDuration;

/// A rate in hertz.
#[derive(Add, Sub, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate {
    hz: f64,
}

impl core::fmt::Debug for Rate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} Hz", self.hz)
    }
}

impl Rate {
    /// Creates a new [`Rate`] from hertz.
    #[must_use]
    pub const fn from_hz(hz: f64) -> Self {
        Self { hz }
    }

    /// Creates a new [`Rate`] whose period is `period`.
    #[must_use]
    pub fn from_period(period: FineDuration) -> Self {
        Self {
            hz: 1.0 / period.total_seconds(),
        }
    }

    #[inline]
    /// Returns the rate in hertz.
    pub const fn hz(&self) -> f64 {
        self.hz
    }

    /// Returns the period of the rate.
    #[must_use]
    pub fn period(&self) -> FineDuration {
        FineDuration::from_seconds(1.0 / self.hz)
    }

    /// Returns the smaller of the two rates.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if self.hz <= other.hz {
            self
        } else {
            other
        }
    }

    /// Returns the larger of the two rates.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if self.hz >= other.hz {
            self
        } else {
            other
        }
    }
}

impl core::ops::Mul<f64> for Rate {
    type Output = Rate;

    fn mul(self, rhs: f64) -> Self::Output {
        Rate { hz: self.hz * rhs }
    }
}

impl core::ops::Div<f64> for Rate {
    type Output = Rate;

    fn div(self, rhs: f64) -> Self::Output {
        Rate { hz: self.hz / rhs }
    }
}
