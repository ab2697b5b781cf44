//! Opt-in logging.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `MINIC_LOG=minic_eval=trace`.
pub const LOG_ENV: &str = "MINIC_LOG";

/// Install a stderr subscriber if `MINIC_LOG` or `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call does anything.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if std::env::var(LOG_ENV).is_ok() {
            EnvFilter::try_from_env(LOG_ENV)
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::try_from_default_env()
        } else {
            return;
        };
        let filter = match filter {
            Ok(filter) => filter,
            Err(e) => {
                eprintln!("warning: ignoring invalid log filter: {e}");
                return;
            }
        };

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
