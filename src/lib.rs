//! Master Volume - Library
//!
//! A one-shot utility that lowers the "Master" playback control of the
//! default mixer device.
//!
//! ## Behavior
//!
//! - Report whether `PULSE_SERVER` is set
//! - Open the mixer, attach it to `default` and load its simple elements
//! - Read the `Master` playback range and front-left volume
//! - Halve the volume, falling back to half the maximum when the result
//!   would drop to a tenth of the maximum or below
//! - Release the mixer session on every exit path

pub mod audio;
pub mod config;
pub mod exit_code;
pub mod platform;

pub use audio::{
    Adjustment, Channel, ElementId, HalvingPolicy, MixerElement, MixerError, MixerSession,
    MixerSubsystem, SessionDriver, Stage, Status, VolumeRange,
};
pub use config::Settings;
pub use exit_code::ErrorCode;
pub use platform::EnvironmentReport;

#[cfg(feature = "alsa")]
pub use audio::AlsaSubsystem;
