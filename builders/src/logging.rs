//! Diagnostic output on stderr.

use std::io;

use eyre::{Result, eyre};
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or
/// everything from this tool at debug level when `verbose` is set.
pub fn init(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            let level = if verbose { "debug" } else { "warn" };
            EnvFilter::try_new(format!(
                "builders={level},php_builders_php={level},php_builders_core={level},php_builders_decl={level}"
            ))
        })
        .map_err(|e| eyre!("failed to create tracing filter: {e}"))?;

    let layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .try_init()
        .map_err(|e| eyre!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}
