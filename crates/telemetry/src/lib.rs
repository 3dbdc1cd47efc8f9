//! Logging and tracing bootstrap.

use stacks_kernel::settings::{LogFormat, TelemetrySettings};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing/logging pipeline.
///
/// Honors `RUST_LOG` when set; defaults to `info` otherwise. Safe to call
/// only once per process.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match settings.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    }
    .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))?;

    tracing::debug!(format = ?settings.log_format, "telemetry initialized");
    Ok(())
}
