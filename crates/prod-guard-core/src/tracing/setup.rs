//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize logging to stderr.
///
/// Reads `PROD_GUARD_LOG` for filter directives, e.g.
/// `PROD_GUARD_LOG=prod_guard_analysis=debug`. Falls back to
/// `prod_guard=warn` when unset or invalid, which keeps the report on stdout
/// uncluttered.
///
/// `ansi` is false in CI mode. Calling this more than once is a no-op.
pub fn init_tracing(ansi: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("prod_guard=warn"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(ansi)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
