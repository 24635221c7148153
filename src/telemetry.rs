//! Logging setup.
//!
//! Diagnostics go through `tracing` to stderr so stdout stays clean for
//! `--json` output. Verbosity comes from `RUST_LOG`, e.g. `fpl_watchlist=debug`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "warn,fpl_watchlist=info";

pub fn init_telemetry() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Ignore the error if a subscriber is already set (e.g. by a test harness)
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .compact(),
        )
        .try_init();
}
