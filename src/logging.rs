//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "PISIM_LOG";

/// Default filter when `PISIM_LOG` is unset.
#[must_use]
pub const fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "pisim=debug"
    } else {
        "pisim=info"
    }
}

/// Filter from `PISIM_LOG`, or [`default_filter`] when unset or invalid.
#[must_use]
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)))
}

/// Install a stderr `fmt` subscriber filtered by `PISIM_LOG`.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_tracing(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
