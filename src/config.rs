//! Run settings.
//!
//! The utility takes no arguments; these are the fixed values it runs with.
//! Log verbosity can be raised through `RUST_LOG`.

use crate::audio::{Channel, ElementId};

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Mixer device the session attaches to
    pub device: String,

    /// Element whose volume is adjusted
    pub element: ElementId,

    /// Channel the current volume is read from
    pub read_channel: Channel,

    /// Filter used when `RUST_LOG` is unset or invalid
    pub log_filter: String,
}

impl Settings {
    pub const DEFAULT_DEVICE: &'static str = "default";
    pub const DEFAULT_LOG_FILTER: &'static str = "warn";
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            device: Self::DEFAULT_DEVICE.to_string(),
            element: ElementId::default(),
            read_channel: Channel::FrontLeft,
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
