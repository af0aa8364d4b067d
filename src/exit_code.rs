//! Process exit codes.

use crate::audio::MixerError;

/// Exit codes returned by the binary.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,
    MixerSession = 1,
    Element = 2,
    Volume = 3,
    Report = 4,
}

impl From<&MixerError> for ErrorCode {
    fn from(err: &MixerError) -> Self {
        match err {
            MixerError::Open(_)
            | MixerError::Attach(_)
            | MixerError::Register(_)
            | MixerError::Load(_) => ErrorCode::MixerSession,
            MixerError::ElementNotFound { .. } => ErrorCode::Element,
            MixerError::VolumeRange(_)
            | MixerError::VolumeQuery(_)
            | MixerError::VolumeWrite(_)
            | MixerError::TargetOutOfRange { .. } => ErrorCode::Volume,
            MixerError::Report { .. } => ErrorCode::Report,
        }
    }
}

impl From<ErrorCode> for std::process::ExitCode {
    fn from(code: ErrorCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}
