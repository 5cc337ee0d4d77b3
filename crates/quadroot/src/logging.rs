//! Logging configuration and initialization.
//!
//! Logs go to stderr so stdout only carries the rendered result.

use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Returns the default filter directive for a verbosity count.
///
/// `0` keeps warnings only, `-v` enables debug and `-vv` or more enables trace.
#[must_use]
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Initializes the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flag when it is set.
pub fn init_logging(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();

    debug!("quadroot started with verbosity level: {verbose}");
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
