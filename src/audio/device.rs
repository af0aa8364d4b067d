//! Mixer data models.
//!
//! Defines the element identifier, volume range, channel ids and the error
//! taxonomy for a mixer session.

use super::session::Stage;
use thiserror::Error;

/// Identifies a simple mixer element by name and index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementId {
    /// Element name as exposed by the mixer (e.g., "Master", "PCM")
    pub name: String,

    /// Index distinguishing elements that share a name
    pub index: u32,
}

impl ElementId {
    pub fn new(name: impl Into<String>, index: u32) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new("Master", 0)
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.name, self.index)
    }
}

/// Inclusive playback volume bounds of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeRange {
    pub min: i64,
    pub max: i64,
}

impl VolumeRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// True if `volume` lies within `[min, max]`.
    pub fn contains(&self, volume: i64) -> bool {
        self.min <= volume && volume <= self.max
    }
}

impl std::fmt::Display for VolumeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Simple element channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    FrontLeft,
    FrontRight,
    RearLeft,
    RearRight,
    FrontCenter,
    Woofer,
    SideLeft,
    SideRight,
    RearCenter,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Channel::FrontLeft => "Front Left",
            Channel::FrontRight => "Front Right",
            Channel::RearLeft => "Rear Left",
            Channel::RearRight => "Rear Right",
            Channel::FrontCenter => "Front Center",
            Channel::Woofer => "Woofer",
            Channel::SideLeft => "Side Left",
            Channel::SideRight => "Side Right",
            Channel::RearCenter => "Rear Center",
        };
        f.write_str(name)
    }
}

/// Failure status reported by the mixer subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// Status code as returned by the subsystem
    pub code: i32,

    /// Human-readable description of the code
    pub description: String,
}

impl Status {
    pub fn new(code: i32, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}

impl std::error::Error for Status {}

/// Mixer session error types.
#[derive(Debug, Error)]
pub enum MixerError {
    #[error("Error opening mixer: {0}")]
    Open(#[source] Status),

    #[error("Error attaching mixer: {0}")]
    Attach(#[source] Status),

    #[error("Error registering mixer element: {0}")]
    Register(#[source] Status),

    #[error("Error loading mixer elements: {0}")]
    Load(#[source] Status),

    #[error("Element not found: {element}")]
    ElementNotFound { element: ElementId },

    #[error("Error getting min / max volume: {0}")]
    VolumeRange(#[source] Status),

    #[error("Error getting current volume: {0}")]
    VolumeQuery(#[source] Status),

    #[error("Error setting volume: {0}")]
    VolumeWrite(#[source] Status),

    #[error("Refusing to set volume {target} outside of {range}")]
    TargetOutOfRange { target: i64, range: VolumeRange },

    #[error("Error writing report: {source}")]
    Report {
        /// Last stage entered when the report line failed
        stage: Stage,
        #[source]
        source: std::io::Error,
    },
}

impl MixerError {
    /// The session stage whose entry failed.
    pub fn stage(&self) -> Stage {
        match self {
            MixerError::Open(_) => Stage::Opened,
            MixerError::Attach(_) => Stage::Attached,
            MixerError::Register(_) => Stage::Registered,
            MixerError::Load(_) => Stage::Loaded,
            MixerError::ElementNotFound { .. } => Stage::ElementResolved,
            MixerError::VolumeRange(_) => Stage::BoundsRead,
            MixerError::VolumeQuery(_) => Stage::CurrentRead,
            MixerError::Report { stage, .. } => *stage,
            MixerError::VolumeWrite(_) | MixerError::TargetOutOfRange { .. } => {
                Stage::VolumeWritten
            }
        }
    }

    /// The subsystem status behind this error, if any.
    pub fn status(&self) -> Option<&Status> {
        match self {
            MixerError::Open(s)
            | MixerError::Attach(s)
            | MixerError::Register(s)
            | MixerError::Load(s)
            | MixerError::VolumeRange(s)
            | MixerError::VolumeQuery(s)
            | MixerError::VolumeWrite(s) => Some(s),
            _ => None,
        }
    }
}
