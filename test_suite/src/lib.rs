//! Fixture programs for the tests that need a real process: `error` and the
//! help flag end the process, so their output and exit code are checked from
//! outside.

use tracing_subscriber::EnvFilter;

/// Description of the `cp` fixture.
pub const CP_DESCRIPTION: &str = "Copies files.";

/// Usage of the `cp` fixture.
pub const CP_USAGE: &str = "cp SRC DST";

/// Installs a `stderr` logger filtered by `RUST_LOG`.
///
/// Without `RUST_LOG` only errors are logged, so the fixtures output is exactly
/// what the parser writes.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
