use aris_core::{
    units::{Distance, FineDuration},
    Range,
};
use thiserror::Error;

/// An interface for error handling in the settings model.
///
/// Invalid arguments to public operations surface here; internal invariant
/// breaches (sample-count drift under the fixed policy) panic instead, since
/// they indicate a defect in the adjustment pipeline rather than bad input.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SettingsError {
    /// Sample period is outside the hardware limits of the system type.
    #[error("Sample period ({0:?}) is out of range ({1:?})")]
    SamplePeriodOutOfRange(FineDuration, Range<FineDuration>),

    /// Anti-aliasing delay is negative.
    #[error("Anti-aliasing ({0:?}) must not be negative")]
    NegativeAntiAliasing(FineDuration),

    /// Sample count is zero.
    #[error("Sample count must be positive")]
    ZeroSampleCount,

    /// Window start does not precede window end.
    #[error("Window start ({start:?}) must be less than window end ({end:?})")]
    WindowBoundsOrdering {
        /// The requested window start.
        start: Distance,
        /// The requested window end.
        end: Distance,
    },

    /// A requested window edge is zero or negative.
    #[error("Requested window edge ({0:?}) must be positive")]
    WindowEdgeNotPositive(Distance),

    /// The guided settings mode carries no adjustment policy.
    #[error("The guided settings mode is invalid")]
    InvalidGuidedSettingsMode,

    /// The ping mode is not available on the system type.
    #[error("Ping mode {0} is not available on this system type")]
    UnavailablePingMode(u32),

    /// A focus position was given with both or neither of its two
    /// representations.
    #[error("Exactly one of focus distance and focus motor units must be given")]
    AmbiguousFocusPosition,

    /// Error while parsing the settings text format.
    #[error("{0}")]
    Parse(#[from] ParseSettingsError),
}

/// An error produced while parsing the `Key=[value]` settings text format.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ParseSettingsError {
    /// An entry is not of the form `Key=[value]`.
    #[error("Malformed entry ({0}); expected Key=[value]")]
    MalformedEntry(String),

    /// An entry key is not a settings field.
    #[error("Unknown key ({0})")]
    UnknownKey(String),

    /// An entry value does not parse as its field's type.
    #[error("Invalid value for {key} ({value})")]
    InvalidValue {
        /// The field whose value failed to parse.
        key: &'static str,
        /// The offending text.
        value: String,
    },

    /// A required field is absent.
    #[error("Missing field ({0})")]
    MissingField(&'static str),

    /// The same key appears twice.
    #[error("Duplicate key ({0})")]
    DuplicateKey(&'static str),
}
