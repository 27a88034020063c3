//! Path checks performed before any file is opened.

use std::path::{Path, PathBuf};

use crate::error::{FileChecksumError, PathKind};

/// Confirms `path` names an existing regular file.
///
/// Symlinks are followed.
///
/// # Errors
///
/// Returns [`FileChecksumError::NotFound`] when the path is missing or is not
/// a regular file.
pub fn validate_file(path: &Path) -> Result<PathBuf, FileChecksumError> {
    if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(FileChecksumError::not_found(path, PathKind::File))
    }
}

/// Confirms `path` names an existing directory.
///
/// # Errors
///
/// Returns [`FileChecksumError::NotFound`] when the path is missing or is not
/// a directory.
pub fn validate_dir(path: &Path) -> Result<PathBuf, FileChecksumError> {
    if path.is_dir() {
        Ok(path.to_path_buf())
    } else {
        Err(FileChecksumError::not_found(path, PathKind::Directory))
    }
}
