//! ALSA mixer backend.
//!
//! Implements the session traits on the `alsa` crate's mixer API. The mixer
//! handle closes on drop, so it needs no matched release call. The simple
//! element id is a plain value that lives only for the lookup.
//!
//! `Selem::get_playback_volume_range` discards the ALSA status, so reading
//! the playback range never fails through this backend.

use super::device::{Channel, ElementId, Status, VolumeRange};
use super::session::{MixerElement, MixerSession, MixerSubsystem};
use alsa::mixer::{Mixer, Selem, SelemChannelId, SelemId};
use std::ffi::CString;
use tracing::debug;

const EINVAL: i32 = 22;

fn status(err: alsa::Error) -> Status {
    Status::new(-err.errno().abs(), err.to_string())
}

impl From<Channel> for SelemChannelId {
    fn from(channel: Channel) -> Self {
        match channel {
            Channel::FrontLeft => SelemChannelId::FrontLeft,
            Channel::FrontRight => SelemChannelId::FrontRight,
            Channel::RearLeft => SelemChannelId::RearLeft,
            Channel::RearRight => SelemChannelId::RearRight,
            Channel::FrontCenter => SelemChannelId::FrontCenter,
            Channel::Woofer => SelemChannelId::Woofer,
            Channel::SideLeft => SelemChannelId::SideLeft,
            Channel::SideRight => SelemChannelId::SideRight,
            Channel::RearCenter => SelemChannelId::RearCenter,
        }
    }
}

/// The system ALSA mixer.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlsaSubsystem;

impl AlsaSubsystem {
    pub fn new() -> Self {
        Self
    }
}

impl MixerSubsystem for AlsaSubsystem {
    type Session = AlsaSession;

    fn open(&self) -> Result<AlsaSession, Status> {
        let mixer = Mixer::open(false).map_err(status)?;
        debug!("opened ALSA mixer");
        Ok(AlsaSession { mixer })
    }
}

/// An open ALSA mixer handle.
pub struct AlsaSession {
    mixer: Mixer,
}

impl MixerSession for AlsaSession {
    type Element<'a> = AlsaElement<'a>
    where
        Self: 'a;

    fn attach(&mut self, device: &str) -> Result<(), Status> {
        let name = CString::new(device)
            .map_err(|_| Status::new(-EINVAL, format!("invalid device name: {device:?}")))?;
        self.mixer.attach(&name).map_err(status)
    }

    fn register(&mut self) -> Result<(), Status> {
        Selem::register(&mut self.mixer).map_err(status)
    }

    fn load(&mut self) -> Result<(), Status> {
        self.mixer.load().map_err(status)
    }

    fn find_element(&self, id: &ElementId) -> Option<Self::Element<'_>> {
        let selem_id = SelemId::new(&id.name, id.index);
        self.mixer
            .find_selem(&selem_id)
            .map(|selem| AlsaElement { selem })
    }
}

impl Drop for AlsaSession {
    fn drop(&mut self) {
        debug!("closing ALSA mixer");
    }
}

/// A simple mixer element borrowed from its session.
pub struct AlsaElement<'a> {
    selem: Selem<'a>,
}

impl MixerElement for AlsaElement<'_> {
    fn playback_volume_range(&self) -> Result<VolumeRange, Status> {
        let (min, max) = self.selem.get_playback_volume_range();
        Ok(VolumeRange::new(min, max))
    }

    fn playback_volume(&self, channel: Channel) -> Result<i64, Status> {
        self.selem
            .get_playback_volume(channel.into())
            .map_err(status)
    }

    fn set_playback_volume_all(&self, volume: i64) -> Result<(), Status> {
        self.selem.set_playback_volume_all(volume).map_err(status)
    }
}
