use std::path::PathBuf;

use logging::trace_walk;

use crate::error::WalkError;
use crate::pattern::FilePattern;
use crate::walker::Walker;

/// Iterator over the regular files below a root that match a [`FilePattern`].
///
/// Paths are absolute and arrive in the walker's depth-first, byte-wise
/// sorted order. The first traversal error ends the iteration.
pub struct FileWalker {
    walker: Walker,
    pattern: FilePattern,
}

impl FileWalker {
    pub(crate) const fn new(walker: Walker, pattern: FilePattern) -> Self {
        Self { walker, pattern }
    }

    /// Pattern used to select files.
    #[must_use]
    pub const fn pattern(&self) -> &FilePattern {
        &self.pattern
    }
}

impl Iterator for FileWalker {
    type Item = Result<PathBuf, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(error) => return Some(Err(error)),
            };
            if entry.is_root() || !entry.is_regular_file() {
                continue;
            }
            if self.pattern.is_match(entry.relative_path()) {
                trace_walk!(path = %entry.full_path().display(), "selected file");
                return Some(Ok(entry.into_path()));
            }
        }
    }
}
