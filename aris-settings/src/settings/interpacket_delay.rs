use aris_core::units::FineDuration;
use serde::{Deserialize, Serialize};

/// The delay inserted between the network packets of a frame.
///
/// Slower links need breathing room between packets; the delay lengthens the
/// minimum frame period and therefore lowers the achievable frame rate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InterpacketDelay {
    enabled: bool,
    delay: FineDuration,
}

impl InterpacketDelay {
    /// No interpacket delay.
    pub const OFF: Self = Self {
        enabled: false,
        delay: FineDuration::ZERO,
    };

    /// Creates a new [`InterpacketDelay`].
    #[must_use]
    pub const fn new(enabled: bool, delay: FineDuration) -> Self {
        Self { enabled, delay }
    }

    /// Whether the delay is applied.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// The delay between packets.
    #[must_use]
    pub const fn delay(&self) -> FineDuration {
        self.delay
    }
}
