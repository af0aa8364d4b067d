//! Mixer session driver.
//!
//! Walks a mixer session through open, attach, register, load, element
//! lookup, volume reads and the final write. Every step is attempted once;
//! the first failure ends the run. The session is released when it goes out
//! of scope, so every exit path after a successful open releases it exactly
//! once.

use super::device::{Channel, ElementId, MixerError, Status, VolumeRange};
use super::policy::{HalvingPolicy, Plan};
use crate::config::Settings;
use std::io::Write;
use tracing::{debug, info, warn};

/// Entry point into the mixer subsystem.
pub trait MixerSubsystem {
    type Session: MixerSession;

    /// Acquire a new, unattached session handle.
    fn open(&self) -> Result<Self::Session, Status>;
}

/// An open mixer session. Dropping it releases the handle.
pub trait MixerSession {
    type Element<'a>: MixerElement
    where
        Self: 'a;

    /// Bind the session to a named device.
    fn attach(&mut self, device: &str) -> Result<(), Status>;

    /// Register simple element enumeration.
    fn register(&mut self) -> Result<(), Status>;

    /// Populate the element list from the device.
    fn load(&mut self) -> Result<(), Status>;

    /// Look up an element. The element is owned by the session.
    fn find_element(&self, id: &ElementId) -> Option<Self::Element<'_>>;
}

/// Playback volume controls of a simple element.
pub trait MixerElement {
    fn playback_volume_range(&self) -> Result<VolumeRange, Status>;

    fn playback_volume(&self, channel: Channel) -> Result<i64, Status>;

    /// Set every playback channel to `volume`.
    fn set_playback_volume_all(&self, volume: i64) -> Result<(), Status>;
}

/// Session lifecycle stages, in the order they are entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Closed,
    Opened,
    Attached,
    Registered,
    Loaded,
    ElementResolved,
    BoundsRead,
    CurrentRead,
    VolumeWritten,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    pub range: VolumeRange,
    pub previous: i64,
    pub plan: Plan,
}

impl Adjustment {
    pub fn volume(&self) -> i64 {
        self.plan.target
    }
}

/// Drives one mixer session from open to the volume write.
pub struct SessionDriver {
    settings: Settings,
    policy: HalvingPolicy,
    stage: Stage,
}

impl SessionDriver {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            policy: HalvingPolicy,
            stage: Stage::Closed,
        }
    }

    /// The last stage entered successfully.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Run the full sequence against `subsystem`, writing report lines to `out`.
    pub fn run<S, W>(&mut self, subsystem: &S, out: &mut W) -> Result<Adjustment, MixerError>
    where
        S: MixerSubsystem,
        W: Write,
    {
        self.stage = Stage::Closed;

        let mut session = subsystem.open().map_err(MixerError::Open)?;
        self.enter(Stage::Opened);

        let result = self.drive(&mut session, out);

        drop(session);
        debug!(stage = ?self.stage, "mixer session released");
        result
    }

    fn drive<M, W>(&mut self, session: &mut M, out: &mut W) -> Result<Adjustment, MixerError>
    where
        M: MixerSession,
        W: Write,
    {
        session
            .attach(&self.settings.device)
            .map_err(MixerError::Attach)?;
        self.enter(Stage::Attached);

        session.register().map_err(MixerError::Register)?;
        self.enter(Stage::Registered);

        session.load().map_err(MixerError::Load)?;
        self.enter(Stage::Loaded);

        let element_id = self.settings.element.clone();
        let element = session
            .find_element(&element_id)
            .ok_or_else(|| MixerError::ElementNotFound {
                element: element_id.clone(),
            })?;
        self.enter(Stage::ElementResolved);

        let range = element
            .playback_volume_range()
            .map_err(MixerError::VolumeRange)?;
        self.enter(Stage::BoundsRead);

        let current = element
            .playback_volume(self.settings.read_channel)
            .map_err(MixerError::VolumeQuery)?;
        self.enter(Stage::CurrentRead);

        let plan = self.policy.plan(current, range);
        info!(
            element = %element_id,
            current,
            min = range.min,
            max = range.max,
            target = plan.target,
            fallback = plan.used_fallback(),
            "computed new volume"
        );

        writeln!(
            out,
            "Current volume is: {}, between min {} and max {}.",
            current, range.min, range.max
        )
        .and_then(|()| {
            writeln!(
                out,
                "Setting volume to half a current volume {}. If it gets less or equal to the maximum divided by 10, namely {}, set it to half a maximum {}.",
                plan.half, plan.threshold, plan.fallback
            )
        })
        .map_err(|source| MixerError::Report {
            stage: self.stage,
            source,
        })?;

        if !range.contains(plan.target) {
            return Err(MixerError::TargetOutOfRange {
                target: plan.target,
                range,
            });
        }

        element
            .set_playback_volume_all(plan.target)
            .map_err(MixerError::VolumeWrite)?;
        self.enter(Stage::VolumeWritten);

        // The volume is already changed; losing the confirmation line does not
        // undo it.
        if let Err(e) = writeln!(out, "Volume set to {}", plan.target) {
            warn!(error = %e, volume = plan.target, "could not report new volume");
        }

        Ok(Adjustment {
            range,
            previous: current,
            plan,
        })
    }

    fn enter(&mut self, stage: Stage) {
        debug!(from = ?self.stage, to = ?stage, "mixer stage transition");
        self.stage = stage;
    }
}
