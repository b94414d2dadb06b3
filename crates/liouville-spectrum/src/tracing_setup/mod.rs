//! Tracing initialization.

use std::sync::Once;

use liouville_core::config::ObservabilityConfig;
use liouville_core::constants::LOG_ENV_VAR;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// `LIOUVILLE_LOG` (e.g. `liouville_storage=debug,info`) takes precedence over
/// `config.log_level`. Idempotent; if another subscriber is already installed
/// it is left in place.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
        let registry = tracing_subscriber::registry().with(filter);

        let installed = if config.json {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };

        if installed.is_err() {
            tracing::debug!("global tracing subscriber already set");
        }
    });
}
