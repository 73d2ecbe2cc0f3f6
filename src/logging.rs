use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter, e.g. `XPANDR_LOG=debug`
pub const LOG_ENV_VAR: &str = "XPANDR_LOG";

/// Initialise diagnostics on stderr; stdout carries command output only.
/// Defaults to `warn` when `XPANDR_LOG` is unset or invalid.
pub fn init_logging() -> Result<(), String> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| format!("failed to initialise logging: {}", e))
}
