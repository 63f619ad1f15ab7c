use serde::{Deserialize, Serialize};

/// The acoustic frequency band.
///
/// Every model transmits at one of two fixed frequencies; the high band
/// images better up close, the low band carries farther. See
/// [`auto::best_frequency`](crate::auto::best_frequency).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    High,
    Low,
}

impl Frequency {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Frequency::High => "High",
            Frequency::Low => "Low",
        }
    }
}
