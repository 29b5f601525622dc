//! `tracing` subscriber setup for the CLI.

use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_FILTER;

/// Install a stderr `fmt` subscriber filtered by `directives`. Invalid
/// directives fall back to the default filter. A second call is a no-op.
pub fn init(directives: &str) {
    let filter = match EnvFilter::try_new(directives) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("invalid log filter '{directives}' ({e}); using '{DEFAULT_LOG_FILTER}'");
            EnvFilter::new(DEFAULT_LOG_FILTER)
        }
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
