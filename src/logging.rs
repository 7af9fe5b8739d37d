// src/logging.rs
use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt, prelude::*, util::TryInitError};

/// Install the stderr subscriber that report lines are written through.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `verbose`.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_tracing(verbose: bool) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "info" })
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .try_init()
}
