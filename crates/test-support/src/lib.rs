//! Shared test fixtures for the filesum workspace.
//!
//! Helpers panic on I/O failure; they are meant for tests only.

#![deny(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary directory populated with files for a test.
///
/// The directory and everything in it is removed when the value is dropped.
#[derive(Debug)]
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    /// Creates an empty fixture directory.
    ///
    /// # Panics
    ///
    /// Panics when the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temporary directory"),
        }
    }

    /// Root of the fixture.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `contents` to `relative`, creating parent directories.
    ///
    /// # Panics
    ///
    /// Panics when the file or its parents cannot be created.
    pub fn file(&self, relative: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directories");
        }
        fs::write(&path, contents).expect("write fixture file");
        path
    }

    /// Creates the directory `relative` and its parents.
    ///
    /// # Panics
    ///
    /// Panics when the directory cannot be created.
    pub fn dir(&self, relative: impl AsRef<Path>) -> PathBuf {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(&path).expect("create fixture directory");
        path
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic pseudo-random bytes, identical for equal `seed` and `len`.
#[must_use]
pub fn patterned_bytes(seed: u32, len: usize) -> Vec<u8> {
    let mut state = seed.wrapping_mul(0x9e37_79b9).wrapping_add(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state.to_le_bytes()[0]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_creates_nested_files() {
        let fixture = Fixture::new();
        let path = fixture.file("a/b/c.txt", b"data");
        assert_eq!(fs::read(&path).unwrap(), b"data");
        assert!(path.starts_with(fixture.path()));
        assert!(fixture.dir("empty").is_dir());
    }

    #[test]
    fn patterned_bytes_are_reproducible() {
        assert_eq!(patterned_bytes(7, 64), patterned_bytes(7, 64));
        assert_ne!(patterned_bytes(7, 64), patterned_bytes(8, 64));
        assert_eq!(patterned_bytes(1, 1000).len(), 1000);
    }
}
