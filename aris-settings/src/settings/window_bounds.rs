use aris_core::units::Distance;
use serde::Serialize;

use crate::error::SettingsError;

/// The imaging window, as ranges from the sonar.
///
/// The start is strictly less than the end; a zero-length window is not
/// representable.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WindowBounds {
    window_start: Distance,
    window_end: Distance,
}

impl WindowBounds {
    /// Creates a new [`WindowBounds`].
    pub fn new(window_start: Distance, window_end: Distance) -> Result<Self, SettingsError> {
        if window_start >= window_end {
            return Err(SettingsError::WindowBoundsOrdering {
                start: window_start,
                end: window_end,
            });
        }
        Ok(Self {
            window_start,
            window_end,
        })
    }

    /// Builds bounds already known to be ordered (derived sample geometry).
    pub(crate) fn new_unchecked(window_start: Distance, window_end: Distance) -> Self {
        debug_assert!(window_start < window_end);
        Self {
            window_start,
            window_end,
        }
    }

    /// The near edge of the window.
    #[must_use]
    pub const fn window_start(&self) -> Distance {
        self.window_start
    }

    /// The far edge of the window.
    #[must_use]
    pub const fn window_end(&self) -> Distance {
        self.window_end
    }

    /// The length of the window.
    #[must_use]
    pub fn window_length(&self) -> Distance {
        self.window_end - self.window_start
    }

    /// The midpoint of the window.
    #[must_use]
    pub fn midpoint(&self) -> Distance {
        (self.window_start + self.window_end) / 2.0
    }
}
