//! Acoustic settings model for the ARIS 1200/1800/3000 sonar family.
//!
//! Given user-facing intents ("move the imaging window", "use a guided sample
//! count", "set frame rate") and environmental observations (water
//! temperature, depth, salinity), this crate computes the low-level hardware
//! parameters — sample period, sample start delay, sample count, pulse width,
//! frequency, frame rate — that produce a valid, hardware-constrained
//! configuration, and derives physical quantities (imaging window bounds,
//! resolution, depth) from those parameters.
//!
//! The central type is [`settings::AcousticSettings`], an immutable snapshot
//! of the device configuration. Window movement goes through the operations
//! in [`adjust::ops`], which dispatch to one of three adjustment policies
//! selected by [`adjust::GuidedSettingsMode`].

pub mod adjust;
pub mod auto;
pub mod calculations;
pub mod constraints;
pub mod error;
pub mod max_frame_rate;
pub mod prelude;
pub mod settings;
pub mod system;
pub mod text;

pub use error::SettingsError;
