//! Diagnostic output for the host binary.
//!
//! Events go to stderr so that plain and JSON listings on stdout stay clean.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "SPARKBOARD_LOG";

/// Install the global subscriber.
///
/// `SPARKBOARD_LOG` takes precedence; otherwise the level is `warn`, or
/// `debug` when `verbose` is set.
pub fn initialize(verbose: bool) -> Result<()> {
	let fallback = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
