use std::path::PathBuf;

use crate::error::WalkError;
use crate::files::FileWalker;
use crate::pattern::FilePattern;
use crate::walker::Walker;

/// Configures a filesystem traversal rooted at a specific path.
#[derive(Clone, Debug)]
pub struct WalkBuilder {
    root: PathBuf,
    include_root: bool,
    pattern: Option<String>,
}

impl WalkBuilder {
    /// Creates a new builder that will traverse the provided root path.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            include_root: true,
            pattern: None,
        }
    }

    /// Controls whether the root entry should be included in the output.
    ///
    /// When disabled, traversal starts directly with the root's children.
    #[must_use]
    pub const fn include_root(mut self, include: bool) -> Self {
        self.include_root = include;
        self
    }

    /// Sets the glob used by [`files`](Self::files). Defaults to `*`.
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Builds a [`Walker`] yielding every entry.
    ///
    /// # Errors
    ///
    /// Fails when the root cannot be inspected or its listing cannot be read.
    pub fn build(self) -> Result<Walker, WalkError> {
        Walker::new(self.root, self.include_root)
    }

    /// Builds a [`FileWalker`] yielding matching regular files.
    ///
    /// # Errors
    ///
    /// Fails when the pattern is malformed, or for the same reasons as
    /// [`build`](Self::build).
    pub fn files(self) -> Result<FileWalker, WalkError> {
        let pattern = match &self.pattern {
            Some(pattern) => FilePattern::new(pattern)?,
            None => FilePattern::default(),
        };
        let walker = Walker::new(self.root, false)?;
        Ok(FileWalker::new(walker, pattern))
    }
}
