use serde::{Deserialize, Serialize};

/// The three hardware models of the sonar family.
///
/// Each model has a distinct configuration table; see
/// [`SystemConfiguration`](super::SystemConfiguration).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemType {
    /// 1.8/1.1 MHz, up to 96 beams.
    Aris1800,
    /// 3.0/1.8 MHz, up to 128 beams.
    Aris3000,
    /// 1.2/0.7 MHz, 48 beams.
    Aris1200,
}

impl SystemType {
    /// All system types, in wire-code order.
    pub const ALL: [SystemType; 3] = [SystemType::Aris1800, SystemType::Aris3000, SystemType::Aris1200];

    /// The device wire code for the system type.
    #[must_use]
    pub const fn wire_code(self) -> u32 {
        match self {
            SystemType::Aris1800 => 0,
            SystemType::Aris3000 => 1,
            SystemType::Aris1200 => 2,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self.wire_code() as usize
    }
}

impl TryFrom<u32> for SystemType {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SystemType::Aris1800),
            1 => Ok(SystemType::Aris3000),
            2 => Ok(SystemType::Aris1200),
            other => Err(other),
        }
    }
}
