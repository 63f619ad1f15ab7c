use derive_more::{Add, Sub};
use serde::{Deserialize, Serialize};

use super::{Distance, FineDuration};

/// A velocity in meters per second.
#[derive(Add, Sub, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Velocity {
    meters_per_second: f64,
}

impl core::fmt::Debug for Velocity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} m/s", self.meters_per_second)
    }
}

impl Velocity {
    /// Creates a new [`Velocity`] from meters per second.
    #[must_use]
    pub const fn from_meters_per_second(meters_per_second: f64) -> Self {
        Self { meters_per_second }
    }

    #[inline]
    /// Returns the velocity in meters per second.
    pub const fn meters_per_second(&self) -> f64 {
        self.meters_per_second
    }
}

/// Distance traveled in `rhs` (one-way).
impl core::ops::Mul<FineDuration> for Velocity {
    type Output = Distance;

    fn mul(self, rhs: FineDuration) -> Self::Output {
        Distance::from_meters(self.meters_per_second * rhs.total_seconds())
    }
}

/// Travel time over `rhs` (one-way).
impl core::ops::Div<Velocity> for Distance {
    type Output = FineDuration;

    fn div(self, rhs: Velocity) -> Self::Output {
        FineDuration::from_seconds(self.meters() / rhs.meters_per_second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travel() {
        let sspd = Velocity::from_meters_per_second(1500.0);
        assert_eq!(
            Distance::from_meters(1.5),
            sspd * FineDuration::from_microseconds(1000.0)
        );
        assert_eq!(
            FineDuration::from_microseconds(1000.0),
            Distance::from_meters(1.5) / sspd
        );
    }

    #[test]
    fn dbg() {
        assert_eq!(
            "1500 m/s",
            format!("{:?}", Velocity::from_meters_per_second(1500.0))
        );
    }
}
