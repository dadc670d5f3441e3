//! Log setup
//!
//! `RUST_LOG` wins when set; otherwise the CLI verbosity picks the level.
//! Output goes to stderr so the gateway's stdout stays protocol-only.

use crate::cli::Verbosity;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. A subscriber set elsewhere is kept.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(verbosity: Verbosity) -> String {
    // Dependencies stay at warn unless asked for explicitly
    format!(
        "warn,{}={}",
        env!("CARGO_CRATE_NAME"),
        verbosity.log_directive()
    )
}
