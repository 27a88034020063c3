use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use checksums::ChecksumError;
use thiserror::Error;
use walk::WalkError;

/// Kind of filesystem object an operation expected to find.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PathKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::File => "file",
            Self::Directory => "directory",
        })
    }
}

/// Errors raised by [`crate::FileChecksum`] operations.
#[derive(Debug, Error)]
pub enum FileChecksumError {
    /// The algorithm name or output length was rejected.
    #[error(transparent)]
    Checksum(#[from] ChecksumError),
    /// A configuration value was outside its accepted range.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the rejected value.
        reason: String,
    },
    /// The path does not exist or is not of the expected kind.
    #[error("the specified {expected} '{}' does not exist", path.display())]
    NotFound {
        /// Path supplied by the caller.
        path: PathBuf,
        /// Kind of object the operation required.
        expected: PathKind,
    },
    /// Reading a file failed.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// Directory traversal failed.
    #[error(transparent)]
    Walk(#[from] WalkError),
}

impl FileChecksumError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn not_found(path: &Path, expected: PathKind) -> Self {
        Self::NotFound {
            path: path.to_path_buf(),
            expected,
        }
    }

    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Reports whether a path was missing or of the wrong kind.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Reports whether the configured algorithm is not registered.
    #[must_use]
    pub const fn is_unknown_algorithm(&self) -> bool {
        matches!(self, Self::Checksum(error) if error.is_unknown_algorithm())
    }

    /// Reports whether a value was rejected as out of range.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        match self {
            Self::InvalidArgument { .. } => true,
            Self::Checksum(error) => error.is_invalid_argument(),
            _ => false,
        }
    }

    /// Path associated with the failure, when there is one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path, .. } | Self::Io { path, .. } => Some(path),
            Self::Walk(error) => error.path(),
            Self::Checksum(_) | Self::InvalidArgument { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_expected_kind() {
        let error = FileChecksumError::not_found(Path::new("missing.bin"), PathKind::File);
        assert_eq!(
            error.to_string(),
            "the specified file 'missing.bin' does not exist"
        );
        assert!(error.is_not_found());
        assert_eq!(error.path(), Some(Path::new("missing.bin")));
    }

    #[test]
    fn checksum_errors_keep_their_message() {
        let error = FileChecksumError::from(checksums::Checksum::new("nope").unwrap_err());
        assert!(error.is_unknown_algorithm());
        assert!(!error.is_invalid_argument());
        assert_eq!(error.to_string(), "unknown checksum algorithm 'nope'");
    }

    #[test]
    fn invalid_argument_classification_covers_both_layers() {
        assert!(FileChecksumError::invalid("chunk size must be positive").is_invalid_argument());
        let nested = checksums::Checksum::with_output_length("shake_128", 0).unwrap_err();
        assert!(FileChecksumError::from(nested).is_invalid_argument());
    }
}
