//! Sound server environment inspection.
//!
//! Reports whether `PULSE_SERVER` is set. The value is informational only;
//! an unset variable is not an error.

use crate::audio::{MixerError, Stage};
use std::io::Write;

/// Snapshot of the sound server environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentReport {
    pulse_server: Option<String>,
}

impl EnvironmentReport {
    pub const PULSE_SERVER: &'static str = "PULSE_SERVER";

    /// Read the current process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(|v| v.to_string_lossy().into_owned()))
    }

    /// Build a report from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            pulse_server: lookup(Self::PULSE_SERVER),
        }
    }

    pub fn pulse_server(&self) -> Option<&str> {
        self.pulse_server.as_deref()
    }

    /// Write the report line to `out`. Runs before any mixer stage.
    pub fn write_line<W: Write>(&self, out: &mut W) -> Result<(), MixerError> {
        writeln!(out, "{self}").map_err(|source| MixerError::Report {
            stage: Stage::Closed,
            source,
        })
    }
}

impl std::fmt::Display for EnvironmentReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.pulse_server {
            Some(server) => write!(f, "{} environment variable: {}", Self::PULSE_SERVER, server),
            None => write!(f, "{} environment variable is not set.", Self::PULSE_SERVER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_server_when_set() {
        let report = EnvironmentReport::from_lookup(|key| {
            (key == "PULSE_SERVER").then(|| "unix:/run/user/1000/pulse/native".to_string())
        });
        assert_eq!(report.pulse_server(), Some("unix:/run/user/1000/pulse/native"));
        assert_eq!(
            report.to_string(),
            "PULSE_SERVER environment variable: unix:/run/user/1000/pulse/native"
        );
    }

    #[test]
    fn test_unset_is_not_an_error() {
        let report = EnvironmentReport::from_lookup(|_| None);
        assert_eq!(report.pulse_server(), None);
        assert_eq!(report.to_string(), "PULSE_SERVER environment variable is not set.");
    }

    #[test]
    fn test_write_line() {
        let report = EnvironmentReport::from_lookup(|_| None);
        let mut out = Vec::new();
        report.write_line(&mut out).unwrap();
        assert_eq!(out, b"PULSE_SERVER environment variable is not set.\n");
    }

    struct ClosedStdout;

    impl Write for ClosedStdout {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from_raw_os_error(9))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_closed_output_is_an_error_not_a_panic() {
        let report = EnvironmentReport::from_lookup(|_| Some("tcp:localhost".to_string()));
        let err = report.write_line(&mut ClosedStdout).unwrap_err();

        assert!(matches!(err, MixerError::Report { stage: Stage::Closed, .. }));
        assert_eq!(crate::ErrorCode::from(&err), crate::ErrorCode::Report);
    }
}
