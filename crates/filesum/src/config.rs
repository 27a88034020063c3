//! Facade configuration.

use std::num::NonZeroUsize;

use checksums::{DEFAULT_ALGORITHM, DEFAULT_OUTPUT_LENGTH};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::FileChecksumError;

/// Chunk size used when reading files unless overridden.
pub const DEFAULT_CHUNK_SIZE: usize = 2048;

/// Settings fixed at [`crate::FileChecksum`] construction.
///
/// `chunk_size` only controls I/O granularity and never changes a checksum.
/// `output_length` is consulted by variable-length algorithms alone.
///
/// # Examples
///
/// ```
/// use filesum::ChecksumConfig;
///
/// let config = ChecksumConfig::default()
///     .with_algorithm("shake_256")
///     .with_output_length(64);
/// assert_eq!(config.chunk_size, 2048);
/// assert!(config.validate().is_ok());
///
/// assert!(ChecksumConfig::default().with_chunk_size(0).validate().is_err());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChecksumConfig {
    /// Registered algorithm name.
    pub algorithm: String,
    /// Bytes requested per read.
    pub chunk_size: usize,
    /// Digest length for variable-length algorithms.
    pub output_length: usize,
}

impl Default for ChecksumConfig {
    fn default() -> Self {
        Self {
            algorithm: DEFAULT_ALGORITHM.to_owned(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            output_length: DEFAULT_OUTPUT_LENGTH,
        }
    }
}

impl ChecksumConfig {
    /// Selects the algorithm.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    /// Sets the read chunk size.
    #[must_use]
    pub const fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Sets the digest length used by variable-length algorithms.
    #[must_use]
    pub const fn with_output_length(mut self, output_length: usize) -> Self {
        self.output_length = output_length;
        self
    }

    /// Checks every field without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`FileChecksumError::Checksum`] for an unknown algorithm or a
    /// zero output length on a variable-length algorithm, and
    /// [`FileChecksumError::InvalidArgument`] for a zero chunk size.
    pub fn validate(&self) -> Result<(), FileChecksumError> {
        self.chunk_size()?;
        let spec = checksums::resolve(&self.algorithm)?;
        checksums::Checksum::from_spec(spec, self.output_length)?;
        Ok(())
    }

    pub(crate) fn chunk_size(&self) -> Result<NonZeroUsize, FileChecksumError> {
        NonZeroUsize::new(self.chunk_size)
            .ok_or_else(|| FileChecksumError::invalid("the chunk size must be greater than 0"))
    }
}
