//! crates/logging/src/tracing_macros.rs
//! Convenience macros for filesum-specific tracing.
//!
//! These macros provide ergonomic wrappers around standard tracing macros
//! with the targets listed in [`crate::Subsystem`]. Callers must depend on
//! `tracing` directly because the expansion refers to `::tracing`.

/// Emit a registry trace.
///
/// # Example
/// ```ignore
/// trace_registry!("registered {} algorithms", count);
/// ```
#[macro_export]
macro_rules! trace_registry {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "filesum::registry", $($arg)*);
    };
}

/// Emit a checksum accumulator trace.
///
/// # Example
/// ```ignore
/// trace_digest!(algorithm = name, "absorbed {} bytes", len);
/// ```
#[macro_export]
macro_rules! trace_digest {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "filesum::digest", $($arg)*);
    };
}

/// Emit a chunked I/O trace.
///
/// # Example
/// ```ignore
/// trace_io!("read {} bytes from {}", count, path.display());
/// ```
#[macro_export]
macro_rules! trace_io {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "filesum::io", $($arg)*);
    };
}

/// Emit a traversal trace.
///
/// # Example
/// ```ignore
/// trace_walk!("entering directory {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_walk {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "filesum::walk", $($arg)*);
    };
}

/// Emit a verification outcome.
///
/// # Example
/// ```ignore
/// trace_verify!(matched, "verified {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_verify {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "filesum::verify", $($arg)*);
    };
}
