use derive_more::{Add, Neg, Sub};
use serde::{Deserialize, Serialize};

/// A duration in microseconds.
///
/// Sonar timing parameters (sample period, sample start delay, pulse width)
/// are expressed in microseconds with sub-microsecond intermediate values, so
/// this type carries a fractional microsecond count rather than wrapping
/// [`core::time::Duration`].
#[derive(Add, Sub, Neg, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FineDuration {
    microseconds: f64,
}

impl core::fmt::Debug for FineDuration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} µs", self.microseconds)
    }
}

impl FineDuration {
    /// A zero duration.
    pub const ZERO: Self = Self { microseconds: 0.0 };

    /// One microsecond.
    pub const ONE_MICROSECOND: Self = Self { microseconds: 1.0 };

    /// Creates a new [`FineDuration`] from microseconds.
    #[must_use]
    pub const fn from_microseconds(microseconds: f64) -> Self {
        Self { microseconds }
    }

    /// Creates a new [`FineDuration`] from seconds.
    #[must_use]
    pub fn from_seconds(seconds: f64) -> Self {
        Self {
            microseconds: seconds * 1e6,
        }
    }

    #[inline]
    /// Returns the duration in microseconds.
    pub const fn total_microseconds(&self) -> f64 {
        self.microseconds
    }

    /// Returns the duration in seconds.
    #[must_use]
    pub fn total_seconds(&self) -> f64 {
        self.microseconds / 1e6
    }

    /// Rounds up to the next whole microsecond.
    #[must_use]
    pub fn ceil_to_microsecond(self) -> Self {
        Self {
            microseconds: self.microseconds.ceil(),
        }
    }

    /// Rounds down to the previous whole microsecond.
    #[must_use]
    pub fn floor_to_microsecond(self) -> Self {
        Self {
            microseconds: self.microseconds.floor(),
        }
    }

    /// Returns the absolute value of the duration.
    #[must_use]
    pub fn abs(self) -> Self {
        Self {
            microseconds: self.microseconds.abs(),
        }
    }

    /// Returns the smaller of the two durations.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if self.microseconds <= other.microseconds {
            self
        } else {
            other
        }
    }

    /// Returns the larger of the two durations.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if self.microseconds >= other.microseconds {
            self
        } else {
            other
        }
    }
}

impl core::ops::Mul<f64> for FineDuration {
    type Output = FineDuration;

    fn mul(self, rhs: f64) -> Self::Output {
        FineDuration {
            microseconds: self.microseconds * rhs,
        }
    }
}

impl core::ops::Mul<u32> for FineDuration {
    type Output = FineDuration;

    fn mul(self, rhs: u32) -> Self::Output {
        FineDuration {
            microseconds: self.microseconds * rhs as f64,
        }
    }
}

impl core::ops::Div<f64> for FineDuration {
    type Output = FineDuration;

    fn div(self, rhs: f64) -> Self::Output {
        FineDuration {
            microseconds: self.microseconds / rhs,
        }
    }
}

impl core::ops::Div<FineDuration> for FineDuration {
    type Output = f64;

    fn div(self, rhs: FineDuration) -> Self::Output {
        self.microseconds / rhs.microseconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ops() {
        let us = FineDuration::from_microseconds;
        assert_eq!(us(12.0), us(4.0) + us(8.0));
        assert_eq!(us(-4.0), us(4.0) - us(8.0));
        assert_eq!(us(8.0), us(4.0) * 2.0);
        assert_eq!(us(8.0), us(4.0) * 2u32);
        assert_eq!(us(2.0), us(4.0) / 2.0);
        assert_eq!(2.0, us(8.0) / us(4.0));
    }

    #[rstest::rstest]
    #[case(5.0, 4.2)]
    #[case(4.0, 4.0)]
    #[case(-4.0, -4.2)]
    fn ceil(#[case] expected: f64, #[case] value: f64) {
        assert_eq!(
            FineDuration::from_microseconds(expected),
            FineDuration::from_microseconds(value).ceil_to_microsecond()
        );
    }

    #[rstest::rstest]
    #[case(4.0, 4.8)]
    #[case(4.0, 4.0)]
    fn floor(#[case] expected: f64, #[case] value: f64) {
        assert_eq!(
            FineDuration::from_microseconds(expected),
            FineDuration::from_microseconds(value).floor_to_microsecond()
        );
    }

    #[test]
    fn seconds() {
        assert_eq!(2e6, FineDuration::from_seconds(2.0).total_microseconds());
        assert_eq!(0.5, FineDuration::from_microseconds(500_000.0).total_seconds());
    }

    #[test]
    fn dbg() {
        assert_eq!("420 µs", format!("{:?}", FineDuration::from_microseconds(420.0)));
    }
}
