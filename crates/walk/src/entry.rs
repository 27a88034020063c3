use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of a filesystem traversal step.
#[derive(Debug)]
pub struct WalkEntry {
    pub(crate) full_path: PathBuf,
    pub(crate) relative_path: PathBuf,
    pub(crate) metadata: fs::Metadata,
    pub(crate) depth: usize,
    pub(crate) is_root: bool,
}

impl WalkEntry {
    /// Returns the absolute path to the filesystem entry.
    #[must_use]
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Returns the path relative to the traversal root.
    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Metadata captured without following symlinks.
    #[must_use]
    pub const fn metadata(&self) -> &fs::Metadata {
        &self.metadata
    }

    /// Returns the final component of the relative path, or `None` for the root.
    #[must_use]
    pub fn file_name(&self) -> Option<&OsStr> {
        if self.is_root {
            None
        } else {
            self.relative_path.file_name()
        }
    }

    /// Reports whether the entry resolves to a regular file.
    ///
    /// Symlinks count when their target is a regular file; dangling links do not.
    #[must_use]
    pub fn is_regular_file(&self) -> bool {
        let file_type = self.metadata.file_type();
        if file_type.is_file() {
            return true;
        }
        file_type.is_symlink() && fs::metadata(&self.full_path).is_ok_and(|target| target.is_file())
    }

    /// Reports the depth of the entry relative to the root (root depth is `0`).
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Indicates whether this entry corresponds to the traversal root.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.is_root
    }

    /// Consumes the entry, returning its absolute path.
    #[must_use]
    pub fn into_path(self) -> PathBuf {
        self.full_path
    }
}
