//! Tracing setup for test runs
//!
//! Page objects only emit `tracing` events; a test binary opts in to seeing
//! them by calling [`init_tracing`] once (repeated calls are harmless).

use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive, e.g. `editor_pilot=debug`
pub const LOG_LEVEL_ENV_VAR: &str = "EDITOR_PILOT_LOG_LEVEL";

/// Used when [`LOG_LEVEL_ENV_VAR`] is unset or invalid
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Build the filter from [`LOG_LEVEL_ENV_VAR`]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_LEVEL_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install a stderr subscriber unless one is already installed
///
/// Returns whether this call installed it.
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_timer(ChronoLocal::rfc_3339())
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_should_be_idempotent() {
        init_tracing();
        assert!(!init_tracing());
    }
}
