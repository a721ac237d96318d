//! Diagnostic logging setup for the command-line tool

use tracing_subscriber::EnvFilter;

/// Default filter directive for a given `-v` count
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "wordseek=warn",
        1 => "wordseek=info",
        2 => "wordseek=debug",
        _ => "wordseek=trace",
    }
}

/// Install a stderr subscriber; `RUST_LOG` takes precedence over `verbosity`
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(verbosity: u8) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
