use serde::{Deserialize, Serialize};

/// Water salinity, in the three coarse classes the sonar distinguishes.
///
/// Each class carries an implicit salinity in parts per thousand, which is the
/// value recorded by the device and used by the acoustic physics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Salinity {
    #[default]
    Fresh,
    Brackish,
    Seawater,
}

impl Salinity {
    /// Returns the salinity in parts per thousand.
    #[must_use]
    pub const fn ppt(self) -> f64 {
        match self {
            Salinity::Fresh => 0.0,
            Salinity::Brackish => 15.0,
            Salinity::Seawater => 35.0,
        }
    }

    /// The device wire code for the salinity class.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Salinity::Fresh => 0,
            Salinity::Brackish => 15,
            Salinity::Seawater => 35,
        }
    }
}

impl TryFrom<u32> for Salinity {
    type Error = u32;

    /// Converts a device wire code (PPT) back to a salinity class.
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Salinity::Fresh),
            15 => Ok(Salinity::Brackish),
            35 => Ok(Salinity::Seawater),
            other => Err(other),
        }
    }
}
