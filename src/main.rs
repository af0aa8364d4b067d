use anyhow::anyhow;
use master_volume::{AlsaSubsystem, EnvironmentReport, ErrorCode, SessionDriver, Settings};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging(settings: &Settings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))?;

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
}

fn main() -> ExitCode {
    let settings = Settings::default();
    if let Err(e) = init_logging(&settings) {
        eprintln!("Logging disabled: {e:#}");
    }

    let environment = EnvironmentReport::from_env();
    tracing::debug!(pulse_server = ?environment.pulse_server(), "inspected environment");

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = environment.write_line(&mut stdout) {
        eprintln!("{e}");
        return ErrorCode::from(&e).into();
    }

    let mut driver = SessionDriver::new(settings);

    match driver.run(&AlsaSubsystem::new(), &mut stdout) {
        Ok(adjustment) => {
            tracing::info!(
                previous = adjustment.previous,
                volume = adjustment.volume(),
                "volume adjusted"
            );
            ErrorCode::Success.into()
        }
        Err(e) => {
            tracing::debug!(stage = ?e.stage(), "mixer run failed");
            eprintln!("{e}");
            ErrorCode::from(&e).into()
        }
    }
}
