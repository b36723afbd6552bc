//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "TOKENBRIDGE_LOG";

/// Initialize the tokenbridge tracing/logging system.
///
/// Reads `TOKENBRIDGE_LOG` for per-subsystem log levels.
/// Format: `TOKENBRIDGE_LOG=tokenbridge_analysis::matcher=debug,tokenbridge=info`
///
/// Falls back to `tokenbridge=info` if unset or invalid. Output goes to
/// stderr so that stdout stays clean for transformed text and JSON reports.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("tokenbridge=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
