//! crates/logging/src/tracing_bridge.rs
//! Subscriber installation driven by [`VerbosityConfig`].
//!
//! The CLI installs a `tracing-subscriber` fmt layer on stderr whose filter is
//! derived from the `-v` count. `RUST_LOG` takes precedence when it is set so
//! ad-hoc debugging does not require new flags.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(2))?;
//! tracing::debug!(target: "filesum::digest", "absorbed chunk");
//! ```

use super::config::VerbosityConfig;
use std::io;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Environment variable that overrides the verbosity-derived directive.
pub const LOG_ENV: &str = "RUST_LOG";

/// Builds the filter for `config`, honouring [`LOG_ENV`] when present and valid.
#[must_use]
pub fn env_filter(config: &VerbosityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(config.directive()))
}

/// Initialize tracing for the current process.
///
/// Returns an error when a global subscriber was already installed, which
/// callers such as tests running in one process may ignore.
pub fn init_tracing(config: VerbosityConfig) -> Result<(), TryInitError> {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .without_time();

    tracing_subscriber::registry()
        .with(env_filter(&config))
        .with(layer)
        .try_init()
}
