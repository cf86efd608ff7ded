use std::io;

use tracing_subscriber::{self, EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber with stderr output.
///
/// # Arguments
/// * `no_color` - Disable ANSI colors in stderr output
/// * `log_level` - Override log level (otherwise uses RUST_LOG or defaults to "info")
///
/// Diagnostics, annotations, and skipped candidates are all reported through
/// this channel; completion requests themselves never return errors to the
/// caller.
pub fn init_logger(no_color: bool, log_level: Option<&str>) -> anyhow::Result<()> {
    // Configure the log level based on whether an override was provided
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => {
            // Fall back to RUST_LOG or default to "info"
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        }
    };

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_filter(filter);

    let result = tracing_subscriber::registry().with(stderr_layer).try_init();

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            // Ignore errors due to the subscriber already being set (tests
            // initialize repeatedly); propagate anything else
            if e.to_string().contains("already been set") {
                Ok(())
            } else {
                Err(anyhow::anyhow!(e))
            }
        }
    }
}
