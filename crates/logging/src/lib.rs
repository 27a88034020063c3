#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides the diagnostics vocabulary shared across the filesum
//! workspace: a fixed set of [`Subsystem`] targets, per-subsystem verbosity
//! levels, and `trace_*!` macros that route events to those targets through
//! the [`tracing`](https://docs.rs/tracing/) facade.
//!
//! # Design
//!
//! Library crates only *emit* events through the macros; they never install a
//! subscriber. Binaries translate their `-v` count (or `--debug=FLAG` tokens)
//! into a [`VerbosityConfig`], which renders an `EnvFilter` directive. With the
//! `tracing` feature enabled, [`init_tracing`] installs a stderr fmt
//! subscriber using that directive.
//!
//! # Examples
//!
//! ```
//! use logging::{Subsystem, VerbosityConfig};
//!
//! let mut config = VerbosityConfig::from_verbose_level(1);
//! config.apply_flag("digest2").unwrap();
//!
//! assert_eq!(config.levels.get(Subsystem::Digest), 2);
//! assert!(config.directive().contains("filesum::digest=debug"));
//! ```

mod config;
mod levels;
mod tracing_macros;

#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
mod tracing_bridge;

pub use config::VerbosityConfig;
pub use levels::{MAX_LEVEL, Subsystem, SubsystemLevels, level_name};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{LOG_ENV, env_filter, init_tracing};
