//! Tracing setup: structured logging with span definitions.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use vigil_core::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `VIGIL_LOG` environment variable for filtering and falls
/// back to `info` if it is unset or invalid. Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("VIGIL_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init();
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
/// Idempotent; the first successful initialization wins.
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_target(true)
            .json()
            .try_init();
    });
}

/// Initialize tracing from the `[observability]` config table.
///
/// `VIGIL_LOG` still wins over the configured level. Returns `false` if a
/// global subscriber was already installed.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("VIGIL_LOG")
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true);

        installed = if config.json_logs {
            builder.json().try_init().is_ok()
        } else {
            builder.try_init().is_ok()
        };
    });
    installed
}
