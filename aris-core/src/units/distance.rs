use derive_more::{Add, Neg, Sub};
use serde::{Deserialize, Serialize};

/// A distance in meters.
#[derive(Add, Sub, Neg, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distance {
    meters: f64,
}

impl core::fmt::Debug for Distance {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} m", self.meters)
    }
}

impl Distance {
    /// A zero-length distance.
    pub const ZERO: Self = Self { meters: 0.0 };

    /// Creates a new [`Distance`] from meters.
    #[must_use]
    pub const fn from_meters(meters: f64) -> Self {
        Self { meters }
    }

    #[inline]
    /// Returns the distance in meters.
    pub const fn meters(&self) -> f64 {
        self.meters
    }

    /// Returns the absolute value of the distance.
    #[must_use]
    pub fn abs(self) -> Self {
        Self {
            meters: self.meters.abs(),
        }
    }

    /// Returns the smaller of the two distances.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if self.meters <= other.meters {
            self
        } else {
            other
        }
    }

    /// Returns the larger of the two distances.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if self.meters >= other.meters {
            self
        } else {
            other
        }
    }
}

impl core::ops::Mul<f64> for Distance {
    type Output = Distance;

    fn mul(self, rhs: f64) -> Self::Output {
        Distance {
            meters: self.meters * rhs,
        }
    }
}

impl core::ops::Mul<Distance> for f64 {
    type Output = Distance;

    fn mul(self, rhs: Distance) -> Self::Output {
        Distance {
            meters: self * rhs.meters,
        }
    }
}

impl core::ops::Div<f64> for Distance {
    type Output = Distance;

    fn div(self, rhs: f64) -> Self::Output {
        Distance {
            meters: self.meters / rhs,
        }
    }
}

impl core::ops::Div<Distance> for Distance {
    type Output = f64;

    fn div(self, rhs: Distance) -> Self::Output {
        self.meters / rhs.meters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ops() {
        assert_eq!(
            Distance::from_meters(3.0),
            Distance::from_meters(1.0) + Distance::from_meters(2.0)
        );
        assert_eq!(
            Distance::from_meters(-1.0),
            Distance::from_meters(1.0) - Distance::from_meters(2.0)
        );
        assert_eq!(Distance::from_meters(4.0), Distance::from_meters(2.0) * 2.0);
        assert_eq!(Distance::from_meters(4.0), 2.0 * Distance::from_meters(2.0));
        assert_eq!(Distance::from_meters(1.0), Distance::from_meters(2.0) / 2.0);
        assert_eq!(2.0, Distance::from_meters(4.0) / Distance::from_meters(2.0));
        assert_eq!(Distance::from_meters(-1.0), -Distance::from_meters(1.0));
    }

    #[test]
    fn abs_min_max() {
        assert_eq!(Distance::from_meters(1.5), Distance::from_meters(-1.5).abs());
        assert_eq!(
            Distance::from_meters(1.0),
            Distance::from_meters(1.0).min(Distance::from_meters(2.0))
        );
        assert_eq!(
            Distance::from_meters(2.0),
            Distance::from_meters(1.0).max(Distance::from_meters(2.0))
        );
    }

    #[test]
    fn dbg() {
        assert_eq!("1.5 m", format!("{:?}", Distance::from_meters(1.5)));
    }

    #[test]
    fn json_round_trip() {
        let d = Distance::from_meters(12.75);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!("12.75", json);
        assert_eq!(d, serde_json::from_str(&json).unwrap());
    }
}
