use serde::{Deserialize, Serialize};

/// The beam/ping pattern of a frame.
///
/// Four fixed variants exist across the family; each determines the beam
/// count and the number of pings needed to assemble one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PingMode {
    /// 48 beams, 3 pings per frame.
    Mode1,
    /// 96 beams, 6 pings per frame.
    Mode3,
    /// 64 beams, 4 pings per frame.
    Mode6,
    /// 128 beams, 8 pings per frame.
    Mode9,
}

impl PingMode {
    /// The device wire code for the ping mode.
    #[must_use]
    pub const fn wire_code(self) -> u32 {
        match self {
            PingMode::Mode1 => 1,
            PingMode::Mode3 => 3,
            PingMode::Mode6 => 6,
            PingMode::Mode9 => 9,
        }
    }

    /// The number of beams imaged per frame.
    #[must_use]
    pub const fn beam_count(self) -> u32 {
        match self {
            PingMode::Mode1 => 48,
            PingMode::Mode3 => 96,
            PingMode::Mode6 => 64,
            PingMode::Mode9 => 128,
        }
    }

    /// The number of pings required to assemble one frame.
    #[must_use]
    pub const fn pings_per_frame(self) -> u32 {
        match self {
            PingMode::Mode1 => 3,
            PingMode::Mode3 => 6,
            PingMode::Mode6 => 4,
            PingMode::Mode9 => 8,
        }
    }
}

impl TryFrom<u32> for PingMode {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PingMode::Mode1),
            3 => Ok(PingMode::Mode3),
            6 => Ok(PingMode::Mode6),
            9 => Ok(PingMode::Mode9),
            other => Err(other),
        }
    }
}
