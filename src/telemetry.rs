//! Tracing initialization.

use std::io::IsTerminal;
use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "POWEREST_LOG";

static INIT: Once = Once::new();

/// Initialize logging to stderr, keeping stdout clean for `--json`.
///
/// Reads `POWEREST_LOG` (e.g. `POWEREST_LOG=powerest=debug`). Without it the
/// filter is `powerest=warn`, or `powerest=debug` when `verbose` is set.
/// Later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose { "powerest=debug" } else { "powerest=warn" };
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
