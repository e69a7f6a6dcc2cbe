//! Process-wide diagnostic logging
//!
//! Diagnostics go to stderr as `LEVEL [file:line] message`, leaving stdout to
//! the user-facing output of each command. `RUST_LOG` takes precedence over
//! the `--verbose` flag.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber. Calling it twice is a no-op.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .try_init();
}
