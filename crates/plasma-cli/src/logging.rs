//! Log subscriber for the `plasma` binary

use anyhow::{anyhow, Context};
use tracing_subscriber::filter::EnvFilter;

/// Install a global `fmt` subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `log_level` when it holds a valid filter. Fails when the
/// level is not a valid filter directive or a global subscriber is already installed.
pub fn init_tracing(log_level: &str) -> Result<(), anyhow::Error> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level)
            .with_context(|| format!("Invalid log level `{}`", log_level))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("Failed to set tracing subscriber: {}", err))
}
