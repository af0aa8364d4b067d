//! Audio module for mixer interactions.
//!
//! This module provides the mixer data model, the volume policy, the
//! session driver and the ALSA backend it runs against.

#[cfg(feature = "alsa")]
pub mod backend;
pub mod device;
pub mod policy;
pub mod session;

#[cfg(feature = "alsa")]
pub use backend::AlsaSubsystem;
pub use device::{Channel, ElementId, MixerError, Status, VolumeRange};
pub use policy::{new_volume, HalvingPolicy, Plan};
pub use session::{Adjustment, MixerElement, MixerSession, MixerSubsystem, SessionDriver, Stage};
