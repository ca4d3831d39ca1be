//! Log output for the command-line front-end.

use tracing_subscriber::EnvFilter;

/// Initialize tracing based on CLI verbosity level.
///
/// Mapping:
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
///
/// `RUST_LOG` env var overrides the CLI flag if set. Call once, at startup.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bcal={level}")));

    // Output goes to stderr so it never mixes with the calendar itself
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
