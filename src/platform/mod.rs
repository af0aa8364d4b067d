//! Platform-specific module for process environment inspection.

pub mod environment;

pub use environment::EnvironmentReport;
