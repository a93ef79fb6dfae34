//! Tracing subscriber setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log filter for the given verbosity
#[must_use]
pub fn filter_for(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

/// Install the global subscriber; call once per process
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter_for(verbose))
        .init();
}

#[cfg(test)]
#[path = "tests/tests_setup_logging.rs"]
mod tests;
