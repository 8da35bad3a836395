//! Diagnostic logging to stderr via [`tracing`].
//!
//! Stdout carries the shelf listing, so log events never go there.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "shelfmap=debug"
    } else {
        "shelfmap=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second call (e.g. from tests) leaves the first subscriber in place.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .try_init();
}
