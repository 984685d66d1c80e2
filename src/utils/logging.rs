//! Diagnostic logging. User-facing output goes through `ui::messages`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter, e.g. `WORKLOG_LOG=debug`.
pub const LOG_ENV: &str = "WORKLOG_LOG";

pub fn enable_logging() {
    let level = std::env::var(LOG_ENV).unwrap_or_else(|_| "warn".into());

    // A subscriber may already be installed (e.g. when called twice from tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!(
            "{}={level}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
        )))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
