//! Verbose stream setup
//!
//! Traces go to stderr so that stdout only ever carries result records.

use std::io;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "warn,tagmeta=debug" } else { "warn" }
}

/// Install the global subscriber. `RUST_LOG` overrides `verbose`.
///
/// Calling this more than once keeps the first subscriber.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();

    if installed.is_ok() {
        tracing::debug!("Verbose output enabled");
    }
}
