//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize logging for binaries and test harnesses that drive the engine.
///
/// Reads `BDT_LOG` for per-module levels, e.g.
/// `BDT_LOG=bdt_agent=trace,bdt_core=info`.
/// Falls back to `bdt=info` if `BDT_LOG` is not set or is invalid.
///
/// Idempotent. The library itself never calls this.
pub fn init_tracing() {
    INIT.call_once(|| {
        // Another subscriber may already be installed by the host process.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(env_filter())
            .try_init();
    });
}

/// The filter `init_tracing` installs, built from the current `BDT_LOG`.
pub fn env_filter() -> EnvFilter {
    filter_from(std::env::var(LOG_ENV_VAR).ok().as_deref())
}

/// Build a filter from a `BDT_LOG`-style directive string.
///
/// `None`, a blank string, or directives that fail to parse all yield the
/// `bdt=info` default.
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    match directives.map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) => EnvFilter::try_new(d).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        None => EnvFilter::new(DEFAULT_LOG_FILTER),
    }
}
